use super::*;

#[test]
fn test_playoff_bars_in_row_order() {
    let rows: Vec<PlayoffRow> = serde_json::from_str(
        r#"[
            {"manager":"Kyle","playoff_appearances":4,"playoff_byes":2,"championship_appearances":2,"championships":1},
            {"manager":"Amy","playoff_appearances":1,"championship_appearances":0,"championships":0}
        ]"#,
    )
    .unwrap();
    assert_eq!(rows[0].championships, 1);

    let chart = build_playoff_chart(&rows);
    assert_eq!(chart.chart_type, CategoryChartType::Bar);
    assert_eq!(chart.labels, ["Kyle", "Amy"]);
    let labels: Vec<&str> = chart.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Playoff Appearances", "Championship Appearances", "Championships"]
    );
    assert_eq!(chart.datasets[0].data, [Some(4.0), Some(1.0)]);
    assert_eq!(chart.datasets[2].data, [Some(1.0), Some(0.0)]);
    assert_eq!(chart.datasets[1].background_color, "rgba(255, 206, 86, 0.7)");
}

#[test]
fn test_no_rows_no_bars() {
    let chart = build_playoff_chart(&[]);
    assert!(chart.labels.is_empty());
    assert!(chart.datasets.iter().all(|d| d.data.is_empty()));
}

#[test]
fn test_bye_counts_are_not_charted() {
    let rows: Vec<PlayoffRow> = serde_json::from_str(
        r#"[{"manager":"Kyle","playoff_appearances":4,"playoff_byes":2,"championship_appearances":2,"championships":1}]"#,
    )
    .unwrap();
    let chart = build_playoff_chart(&rows);
    assert_eq!(chart.datasets.len(), 3);
    assert!(chart.datasets.iter().all(|d| d.data != [Some(2.0)]));
}
