use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    MalformedRecord { index: usize, reason: String },
    UnknownCategory { index: usize, position: String },
}

impl Diagnostic {
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Diagnostic::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Diagnostic::MalformedRecord { index, .. } | Diagnostic::UnknownCategory { index, .. } => {
                *index
            }
        }
    }

    pub fn log(&self) {
        tracing::warn!("{self}");
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedRecord { index, reason } => {
                write!(f, "record {index} skipped: {reason}")
            }
            Diagnostic::UnknownCategory { index, position } => {
                write!(f, "record {index} not plotted: unknown position {position:?}")
            }
        }
    }
}
