use serde::Serialize;

use crate::charts::CategoryChart;
use crate::model::{Diagnostic, Marker, Point, Series};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Dataset<'a> {
    label: &'a str,
    data: &'a [Point],
    background_color: &'a str,
    border_color: &'a str,
    point_style: Marker,
    point_radius: f64,
}

#[derive(Serialize)]
struct SeriesDocument<'a> {
    chart: &'a str,
    #[serde(skip_serializing_if = "no_categories")]
    categories: &'a [String],
    datasets: Vec<Dataset<'a>>,
    diagnostics: &'a [Diagnostic],
}

fn no_categories(categories: &&[String]) -> bool {
    categories.is_empty()
}

pub fn render_series_json(
    chart: &str,
    categories: &[String],
    series: &[Series],
    diagnostics: &[Diagnostic],
) -> Result<String, serde_json::Error> {
    let datasets = series
        .iter()
        .map(|s| Dataset {
            label: &s.label,
            data: &s.points,
            background_color: &s.style.color,
            border_color: &s.style.border_color,
            point_style: s.style.marker,
            point_radius: s.style.radius,
        })
        .collect();
    let doc = SeriesDocument {
        chart,
        categories,
        datasets,
        diagnostics,
    };
    serde_json::to_string_pretty(&doc)
}

pub fn render_category_json(chart: &CategoryChart) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(chart)
}
