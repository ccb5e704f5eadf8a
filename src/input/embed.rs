use scraper::{Html, Selector};

use crate::input::InputError;

pub fn extract_script_payload(html: &str, id: &str) -> Result<String, InputError> {
    let document = Html::parse_document(html);
    let scripts = Selector::parse("script")
        .map_err(|e| InputError::InvalidInput(format!("script selector: {e}")))?;

    document
        .select(&scripts)
        .find(|el| el.value().attr("id") == Some(id))
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or_else(|| {
            InputError::MissingDataSource(format!("no script element with id {id:?}"))
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/embed.rs"]
mod tests;
