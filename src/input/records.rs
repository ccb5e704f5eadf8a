use serde::Deserialize;
use serde_json::Value;

use crate::input::InputError;
use crate::model::{Diagnostic, Record};

#[derive(Debug, Deserialize)]
struct RawRecord {
    manager: Option<String>,
    season: Option<SeasonField>,
    #[serde(alias = "player_pos")]
    position: Option<String>,
    player_name: Option<String>,
    player_cost: Option<f64>,
    points: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeasonField {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    pub records: Vec<Record>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse_records(json: &str) -> Result<RecordBatch, InputError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(InputError::InvalidInput(
            "record payload must be a JSON array".to_string(),
        ));
    };
    Ok(validate_records(items))
}

pub fn validate_records(items: Vec<Value>) -> RecordBatch {
    let mut batch = RecordBatch {
        records: Vec::with_capacity(items.len()),
        diagnostics: Vec::new(),
    };
    for (index, item) in items.into_iter().enumerate() {
        match validate_one(index, item) {
            Ok(record) => batch.records.push(record),
            Err(diag) => {
                diag.log();
                batch.diagnostics.push(diag);
            }
        }
    }
    batch
}

fn validate_one(index: usize, item: Value) -> Result<Record, Diagnostic> {
    if !item.is_object() {
        return Err(Diagnostic::malformed(index, "record is not an object"));
    }
    let raw: RawRecord =
        serde_json::from_value(item).map_err(|e| Diagnostic::malformed(index, e.to_string()))?;

    let manager = non_blank(raw.manager)
        .ok_or_else(|| Diagnostic::malformed(index, "missing field `manager`"))?;
    let points = raw
        .points
        .ok_or_else(|| Diagnostic::malformed(index, "missing field `points`"))?;
    let season = match raw.season {
        None => None,
        Some(SeasonField::Number(n)) => Some(
            i32::try_from(n)
                .map_err(|_| Diagnostic::malformed(index, format!("season {n} out of range")))?,
        ),
        Some(SeasonField::Text(s)) => Some(s.trim().parse::<i32>().map_err(|_| {
            Diagnostic::malformed(index, format!("season {s:?} is not a year"))
        })?),
    };

    Ok(Record {
        index,
        manager,
        season,
        position: non_blank(raw.position),
        player_name: non_blank(raw.player_name),
        player_cost: raw.player_cost,
        points,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/records.rs"]
mod tests;
