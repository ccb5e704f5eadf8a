use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::InputError;
use crate::input::embed::extract_script_payload;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_source(path: &Path, script_id: Option<&str>) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::MissingDataSource(format!(
            "{} does not exist",
            path.display()
        )));
    }
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    match script_id {
        Some(id) => {
            let payload = extract_script_payload(&text, id)?;
            tracing::debug!(
                "extracted script {id:?} ({} bytes) from {}",
                payload.len(),
                path.display()
            );
            Ok(payload)
        }
        None if is_page(path) => Err(InputError::InvalidInput(format!(
            "{} is an HTML page; pass the id of the script element holding the data",
            path.display()
        ))),
        None => Ok(text),
    }
}

fn is_page(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    name.ends_with(".html") || name.ends_with(".htm")
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/source.rs"]
mod tests;
