use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::charts::manager_trend::default_trend_seasons;
use crate::model::{GroupBy, JitterScheme, Palette, PaletteError, Style};
use crate::pipeline::{ChartKind, ChartSpec, default_position_order};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub position_order: Option<Vec<String>>,
    pub group_by: Option<GroupBy>,
    pub jitter: Option<JitterScheme>,
    pub disable_jitter: bool,
    pub palette: Option<Vec<Style>>,
    pub trend_seasons: Option<Vec<i32>>,
}

impl ChartConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        tracing::debug!("loaded chart config from {}", path.display());
        Ok(config)
    }

    pub fn position_order(&self) -> Vec<String> {
        self.position_order
            .clone()
            .unwrap_or_else(default_position_order)
    }

    pub fn palette_for(&self, kind: ChartKind) -> Result<Palette, ConfigError> {
        match &self.palette {
            Some(styles) => Ok(Palette::new(styles.clone())?),
            None => Ok(kind.default_palette()),
        }
    }

    pub fn spec_for(&self, kind: ChartKind) -> ChartSpec {
        let mut spec = kind.spec();
        if let Some(group_by) = self.group_by {
            spec.group_by = group_by;
        }
        if let (Some(_), Some(jitter)) = (spec.jitter, self.jitter) {
            spec.jitter = Some(jitter);
        }
        if self.disable_jitter {
            spec.jitter = None;
        }
        spec
    }

    pub fn trend_seasons(&self) -> Vec<i32> {
        self.trend_seasons
            .clone()
            .unwrap_or_else(default_trend_seasons)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
