use crate::charts::{CategoryChart, CategoryChartType, CategoryDataset, ChartError};

pub fn build_team_counts(
    manager: &str,
    counts: &[(String, u32)],
) -> Result<CategoryChart, ChartError> {
    let manager = manager.trim();
    if manager.is_empty() {
        return Err(ChartError::MissingDataSource(
            "team counts need a manager".to_string(),
        ));
    }

    let mut dataset = CategoryDataset::bars(
        format!("Favorite Teams for {manager}"),
        counts.iter().map(|(_, n)| Some(f64::from(*n))).collect(),
        "rgba(54, 162, 235, 0.6)",
    );
    dataset.border_color = "rgba(54, 162, 235, 1)".to_string();

    Ok(CategoryChart {
        chart_type: CategoryChartType::Bar,
        title: None,
        labels: counts.iter().map(|(team, _)| team.clone()).collect(),
        datasets: vec![dataset],
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/team_counts.rs"]
mod tests;
