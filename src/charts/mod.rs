//! Bar and line charts whose x-axis is a fixed list of category labels.

pub mod manager_trend;
pub mod playoffs;
pub mod team_counts;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("missing data source: {0}")]
    MissingDataSource(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryChartType {
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub background_color: String,
    pub border_color: String,
    pub fill: bool,
}

impl CategoryDataset {
    pub fn bars(label: impl Into<String>, data: Vec<Option<f64>>, color: &str) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: color.to_string(),
            border_color: color.to_string(),
            fill: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    #[serde(rename = "type")]
    pub chart_type: CategoryChartType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub labels: Vec<String>,
    pub datasets: Vec<CategoryDataset>,
}
