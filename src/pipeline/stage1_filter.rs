use crate::model::{Diagnostic, GroupBy, Record, SeasonFilter};
use crate::pipeline::{ChartSpec, XAxis};

pub fn admit_records<'a>(
    records: &'a [Record],
    filter: &SeasonFilter,
    spec: &ChartSpec,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<&'a Record> {
    let mut admitted = Vec::with_capacity(records.len());
    for record in records {
        if let Some(field) = missing_field(record, filter, spec) {
            let diag = Diagnostic::malformed(record.index, format!("missing field `{field}`"));
            diag.log();
            diagnostics.push(diag);
            continue;
        }
        if filter.admits(record.season) {
            admitted.push(record);
        }
    }
    admitted
}

fn missing_field(record: &Record, filter: &SeasonFilter, spec: &ChartSpec) -> Option<&'static str> {
    let needs_season = filter.needs_season() || spec.group_by == GroupBy::ManagerSeason;
    if needs_season && record.season.is_none() {
        return Some("season");
    }
    match spec.x_axis {
        XAxis::Position if record.position.is_none() => Some("position"),
        XAxis::PlayerCost if record.player_cost.is_none() => Some("player_cost"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_filter.rs"]
mod tests;
