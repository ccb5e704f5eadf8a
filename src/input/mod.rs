use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod embed;
pub mod records;
pub mod source;

pub use records::{RecordBatch, parse_records};
pub use source::read_source;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing data source: {0}")]
    MissingDataSource(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InputError {
    pub fn is_missing_source(&self) -> bool {
        matches!(self, InputError::MissingDataSource(_))
    }
}

pub fn load_records(path: &Path, script_id: Option<&str>) -> Result<RecordBatch, InputError> {
    let payload = read_source(path, script_id)?;
    let batch = parse_records(&payload)?;
    tracing::info!(
        "loaded {} records from {} ({} rejected)",
        batch.records.len(),
        path.display(),
        batch.diagnostics.len()
    );
    Ok(batch)
}

pub fn load_json<T: DeserializeOwned>(path: &Path, script_id: Option<&str>) -> Result<T, InputError> {
    let payload = read_source(path, script_id)?;
    Ok(serde_json::from_str(&payload)?)
}
