use super::*;

fn sample() -> TrendData {
    serde_json::from_str(
        r#"{
            "Travis": {"pf": [1400.5, 1502, null, 1333], "pa": [1350, 1490, 1380, 1401]},
            "Kyle": {"pf": [1200], "pa": []}
        }"#,
    )
    .unwrap()
}

#[test]
fn test_trend_for_selected_manager() {
    let chart = build_manager_trend(&sample(), "Travis", &[2021, 2022, 2023, 2024]).unwrap();
    assert_eq!(chart.chart_type, CategoryChartType::Line);
    assert_eq!(chart.labels, ["2021", "2022", "2023", "2024"]);
    assert_eq!(chart.datasets.len(), 2);
    assert_eq!(chart.datasets[0].label, "Points Scored");
    assert_eq!(chart.datasets[0].border_color, "green");
    assert_eq!(
        chart.datasets[0].data,
        [Some(1400.5), Some(1502.0), None, Some(1333.0)]
    );
    assert_eq!(chart.datasets[1].label, "Points Against");
    assert_eq!(chart.datasets[1].border_color, "red");
    assert!(!chart.datasets[1].fill);
}

#[test]
fn test_short_and_long_season_lists_are_aligned() {
    let chart = build_manager_trend(&sample(), "Kyle", &[2023, 2024]).unwrap();
    assert_eq!(chart.datasets[0].data, [Some(1200.0), None]);
    assert_eq!(chart.datasets[1].data, [None::<f64>, None]);

    let chart = build_manager_trend(&sample(), "Travis", &[2023]).unwrap();
    assert_eq!(chart.datasets[1].data, [Some(1350.0)]);
}

#[test]
fn test_unknown_manager_is_missing_source() {
    let err = build_manager_trend(&sample(), "Nobody", &default_trend_seasons()).unwrap_err();
    assert!(matches!(err, ChartError::MissingDataSource(_)));
}

#[test]
fn test_default_seasons() {
    assert_eq!(default_trend_seasons(), [2018, 2019, 2020, 2021, 2022, 2023, 2024]);
}
