use crate::model::{PointMeta, Record};
use crate::pipeline::stage2_group::Group;
use crate::pipeline::{ChartSpec, XAxis};

#[derive(Debug, Clone, PartialEq)]
pub enum XValue {
    Category(String),
    Numeric(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftPoint {
    pub index: usize,
    pub x: XValue,
    pub y: f64,
    pub meta: PointMeta,
}

pub fn collect_points(group: &Group<'_>, spec: &ChartSpec) -> Vec<DraftPoint> {
    match spec.x_axis {
        XAxis::Position if spec.aggregate => aggregate_by_position(&group.records),
        XAxis::Position => group.records.iter().filter_map(|r| position_point(r)).collect(),
        XAxis::PlayerCost => group.records.iter().filter_map(|r| cost_point(r)).collect(),
    }
}

pub fn aggregate_by_position(records: &[&Record]) -> Vec<DraftPoint> {
    let mut totals: Vec<(String, usize, f64, usize)> = Vec::new();
    for record in records {
        let Some(position) = record.position.as_deref() else {
            continue;
        };
        match totals.iter_mut().find(|(p, ..)| p == position) {
            Some((_, _, sum, count)) => {
                *sum += record.points;
                *count += 1;
            }
            None => totals.push((position.to_string(), record.index, record.points, 1)),
        }
    }

    totals
        .into_iter()
        .map(|(position, index, sum, count)| DraftPoint {
            index,
            x: XValue::Category(position.clone()),
            y: sum,
            meta: PointMeta {
                position: Some(position),
                records: Some(count),
                ..PointMeta::default()
            },
        })
        .collect()
}

fn position_point(record: &Record) -> Option<DraftPoint> {
    let position = record.position.clone()?;
    Some(DraftPoint {
        index: record.index,
        x: XValue::Category(position.clone()),
        y: record.points,
        meta: PointMeta {
            position: Some(position),
            season: record.season,
            label: record.player_name.clone(),
            records: None,
        },
    })
}

fn cost_point(record: &Record) -> Option<DraftPoint> {
    let cost = record.player_cost?;
    let label = match (&record.player_name, &record.position) {
        (Some(name), Some(pos)) => Some(format!("{name} ({pos})")),
        (Some(name), None) => Some(name.clone()),
        (None, _) => None,
    };
    Some(DraftPoint {
        index: record.index,
        x: XValue::Numeric(cost),
        y: record.points,
        meta: PointMeta {
            position: record.position.clone(),
            season: record.season,
            label,
            records: None,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
