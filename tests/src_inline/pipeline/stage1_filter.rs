use super::*;
use crate::pipeline::ChartKind;

#[test]
fn test_season_filter_keeps_enabled_seasons_only() {
    let records = vec![
        Record::new(0, "A", 1.0).with_season(2022).with_position("QB"),
        Record::new(1, "A", 2.0).with_season(2023).with_position("QB"),
    ];
    let mut diags = Vec::new();
    let kept = admit_records(
        &records,
        &SeasonFilter::only([2023]),
        &ChartKind::RosterScatter.spec(),
        &mut diags,
    );
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].index, 1);
    assert!(diags.is_empty());
}

#[test]
fn test_missing_season_only_matters_when_filtering() {
    let records = vec![Record::new(0, "A", 1.0).with_position("QB")];
    let spec = ChartKind::RosterScatter.spec();

    let mut diags = Vec::new();
    assert_eq!(
        admit_records(&records, &SeasonFilter::All, &spec, &mut diags).len(),
        1
    );
    assert!(diags.is_empty());

    let kept = admit_records(&records, &SeasonFilter::only([2023]), &spec, &mut diags);
    assert!(kept.is_empty());
    assert_eq!(diags, vec![Diagnostic::malformed(0, "missing field `season`")]);
}

#[test]
fn test_manager_season_grouping_requires_season() {
    let records = vec![Record::new(3, "A", 1.0).with_position("QB")];
    let mut spec = ChartKind::RosterScatter.spec();
    spec.group_by = GroupBy::ManagerSeason;
    let mut diags = Vec::new();
    assert!(admit_records(&records, &SeasonFilter::All, &spec, &mut diags).is_empty());
    assert_eq!(diags[0].index(), 3);
}
