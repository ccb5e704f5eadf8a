use std::collections::BTreeMap;

use serde::Deserialize;

use crate::charts::{CategoryChart, CategoryChartType, CategoryDataset, ChartError};

pub const FIRST_SEASON: i32 = 2018;
pub const LAST_SEASON: i32 = 2024;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManagerSeasons {
    #[serde(default)]
    pub pf: Vec<Option<f64>>,
    #[serde(default)]
    pub pa: Vec<Option<f64>>,
}

pub type TrendData = BTreeMap<String, ManagerSeasons>;

pub fn default_trend_seasons() -> Vec<i32> {
    (FIRST_SEASON..=LAST_SEASON).collect()
}

pub fn build_manager_trend(
    data: &TrendData,
    manager: &str,
    seasons: &[i32],
) -> Result<CategoryChart, ChartError> {
    let totals = data.get(manager).ok_or_else(|| {
        ChartError::MissingDataSource(format!("no season totals for manager {manager:?}"))
    })?;

    if totals.pf.len() != seasons.len() || totals.pa.len() != seasons.len() {
        tracing::debug!(
            "trend for {manager:?}: {} seasons, pf={} pa={}; aligning",
            seasons.len(),
            totals.pf.len(),
            totals.pa.len()
        );
    }

    Ok(CategoryChart {
        chart_type: CategoryChartType::Line,
        title: None,
        labels: seasons.iter().map(|s| s.to_string()).collect(),
        datasets: vec![
            line("Points Scored", align(&totals.pf, seasons.len()), "green"),
            line("Points Against", align(&totals.pa, seasons.len()), "red"),
        ],
    })
}

fn line(label: &str, data: Vec<Option<f64>>, color: &str) -> CategoryDataset {
    CategoryDataset {
        label: label.to_string(),
        data,
        background_color: color.to_string(),
        border_color: color.to_string(),
        fill: false,
    }
}

fn align(values: &[Option<f64>], len: usize) -> Vec<Option<f64>> {
    let mut out: Vec<Option<f64>> = values.iter().take(len).copied().collect();
    out.resize(len, None);
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/manager_trend.rs"]
mod tests;
