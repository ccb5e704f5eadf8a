use serde::Deserialize;

use crate::charts::{CategoryChart, CategoryChartType, CategoryDataset};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayoffRow {
    pub manager: String,
    pub playoff_appearances: u32,
    pub championship_appearances: u32,
    pub championships: u32,
}

const PLAYOFF_COLOR: &str = "rgba(54, 162, 235, 0.7)";
const FINAL_COLOR: &str = "rgba(255, 206, 86, 0.7)";
const TITLE_COLOR: &str = "rgba(75, 192, 192, 0.7)";

pub fn build_playoff_chart(rows: &[PlayoffRow]) -> CategoryChart {
    let column = |f: fn(&PlayoffRow) -> u32| -> Vec<Option<f64>> {
        rows.iter().map(|r| Some(f64::from(f(r)))).collect()
    };

    CategoryChart {
        chart_type: CategoryChartType::Bar,
        title: Some("Fantasy Manager Playoff Stats".to_string()),
        labels: rows.iter().map(|r| r.manager.clone()).collect(),
        datasets: vec![
            CategoryDataset::bars(
                "Playoff Appearances",
                column(|r| r.playoff_appearances),
                PLAYOFF_COLOR,
            ),
            CategoryDataset::bars(
                "Championship Appearances",
                column(|r| r.championship_appearances),
                FINAL_COLOR,
            ),
            CategoryDataset::bars("Championships", column(|r| r.championships), TITLE_COLOR),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/playoffs.rs"]
mod tests;
