use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

use crate::charts::playoffs::{PlayoffRow, build_playoff_chart};
use crate::model::{Record, SeasonFilter};
use crate::pipeline::{build_series, default_position_order};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("league_charts_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn output(kind: ChartKind) -> BuildOutput {
    let records = vec![
        Record::new(0, "Travis", 10.0)
            .with_season(2023)
            .with_position("QB")
            .with_player("Hurts", 40.0),
        Record::new(1, "Travis", 4.0)
            .with_season(2023)
            .with_position("QB")
            .with_player("Backup", 1.0),
        Record::new(2, "Kyle", 6.0).with_season(2023).with_position("FLEX"),
    ];
    build_series(
        &records,
        &SeasonFilter::All,
        &default_position_order(),
        &kind.default_palette(),
        &kind.spec(),
    )
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_json_sink_writes_chart_datasets() {
    let dir = make_temp_dir();
    let kind = ChartKind::PositionSummary;
    let handle = ChartHandle::new("position-summary");
    let mut sink = JsonDirSink::new(&dir, kind, default_position_order())
        .with_input_diagnostics(vec![Diagnostic::malformed(9, "missing field `points`")]);
    sink.replace_series(&handle, &output(kind)).unwrap();

    let doc = read_json(&sink.json_path(&handle));
    assert_eq!(doc["chart"], "position-summary");
    assert_eq!(doc["categories"][0], "QB");

    let dataset = &doc["datasets"][0];
    assert_eq!(dataset["label"], "Travis");
    assert_eq!(dataset["pointStyle"], "circle");
    assert_eq!(dataset["pointRadius"], 8.0);
    assert_eq!(dataset["backgroundColor"], "#1f77b4");
    assert_eq!(dataset["data"][0]["y"], 14.0);
    assert_eq!(dataset["data"][0]["position"], "QB");
    assert_eq!(dataset["data"][0]["records"], 2);
    assert_eq!(doc["datasets"].as_array().unwrap().len(), 1);

    let diags = doc["diagnostics"].as_array().unwrap();
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0]["kind"], "malformed_record");
    assert_eq!(diags[0]["index"], 9);
    assert_eq!(diags[1]["kind"], "unknown_category");
    assert_eq!(diags[1]["position"], "FLEX");

    let text = fs::read_to_string(sink.text_path(&handle)).unwrap();
    assert!(text.contains("Series: 1\n"));
    assert!(text.contains("Malformed records: 1\n"));
    assert!(text.contains("Unknown categories: 1\n"));
    assert!(text.contains("record 2 not plotted: unknown position \"FLEX\""));
}

#[test]
fn test_cost_chart_has_no_categories() {
    let dir = make_temp_dir();
    let kind = ChartKind::DraftScatter;
    let handle = ChartHandle::new("draft");
    let mut sink = JsonDirSink::new(&dir, kind, default_position_order());
    sink.replace_series(&handle, &output(kind)).unwrap();

    let doc = read_json(&sink.json_path(&handle));
    assert!(doc.get("categories").is_none());
    let data = &doc["datasets"][0]["data"];
    assert_eq!(data[0]["x"], 40.0);
    assert_eq!(data[0]["label"], "Hurts (QB)");
    assert_eq!(data[1]["label"], "Backup (QB)");
}

#[test]
fn test_rewrites_are_byte_identical() {
    let dir = make_temp_dir();
    let kind = ChartKind::RosterScatter;
    let handle = ChartHandle::new("roster");
    let mut sink = JsonDirSink::new(&dir, kind, default_position_order());
    sink.replace_series(&handle, &output(kind)).unwrap();
    let first = fs::read(sink.json_path(&handle)).unwrap();
    sink.replace_series(&handle, &output(kind)).unwrap();
    assert_eq!(first, fs::read(sink.json_path(&handle)).unwrap());
}

#[test]
fn test_failed_summary_write_keeps_previous_pair() {
    let dir = make_temp_dir();
    let handle = ChartHandle::new("draft");
    let mut sink = JsonDirSink::new(&dir, ChartKind::DraftScatter, Vec::new());
    sink.replace_series(&handle, &BuildOutput::default()).unwrap();
    let json_before = fs::read(sink.json_path(&handle)).unwrap();
    let text_before = fs::read(sink.text_path(&handle)).unwrap();

    // A directory squatting on the staging path makes the summary write fail.
    fs::create_dir_all(dir.join("draft.txt.tmp")).unwrap();
    let err = sink.replace_series(&handle, &output(ChartKind::DraftScatter));
    assert!(matches!(err, Err(SinkError::Io(_))));

    assert_eq!(fs::read(sink.json_path(&handle)).unwrap(), json_before);
    assert_eq!(fs::read(sink.text_path(&handle)).unwrap(), text_before);
    assert!(!dir.join("draft.json.tmp").exists());
}

#[test]
fn test_write_category_chart() {
    let dir = make_temp_dir();
    let rows = vec![PlayoffRow {
        manager: "Amy".to_string(),
        playoff_appearances: 3,
        championship_appearances: 1,
        championships: 0,
    }];
    let path = write_category_chart(&dir, "playoffs", &build_playoff_chart(&rows)).unwrap();
    let doc = read_json(&path);
    assert_eq!(doc["type"], "bar");
    assert_eq!(doc["labels"][0], "Amy");
    assert_eq!(doc["datasets"][0]["data"][0], 3.0);
    assert_eq!(doc["datasets"][0]["backgroundColor"], "rgba(54, 162, 235, 0.7)");
}

#[test]
fn test_summary_for_empty_chart() {
    let text = text::render_summary_text("roster-scatter", &[], &[]);
    assert!(text.contains("Series: 0\n"));
    assert!(text.contains("(none)"));
}

#[test]
fn test_format_f64_6() {
    assert_eq!(format_f64_6(0.045), "0.045000");
    assert_eq!(format_f64_6(-0.15), "-0.150000");
}
