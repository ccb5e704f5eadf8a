pub mod stage1_filter;
pub mod stage2_group;
pub mod stage3_aggregate;
pub mod stage4_position;
pub mod stage5_jitter;
pub mod stage6_style;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::{Diagnostic, GroupBy, JitterScheme, Palette, Record, SeasonFilter, Series};
use stage1_filter::admit_records;
use stage2_group::group_records;
use stage3_aggregate::collect_points;
use stage4_position::place_points;
use stage5_jitter::apply_jitter;
use stage6_style::assign_style;

pub const DEFAULT_POSITION_ORDER: [&str; 7] = ["QB", "RB", "WR", "TE", "K", "DEF", "BN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XAxis {
    Position,
    PlayerCost,
}

impl XAxis {
    pub fn is_categorical(self) -> bool {
        matches!(self, XAxis::Position)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub group_by: GroupBy,
    pub x_axis: XAxis,
    pub aggregate: bool,
    pub jitter: Option<JitterScheme>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    PositionSummary,
    RosterScatter,
    DraftScatter,
}

impl ChartKind {
    pub fn spec(self) -> ChartSpec {
        match self {
            ChartKind::PositionSummary => ChartSpec {
                group_by: GroupBy::Manager,
                x_axis: XAxis::Position,
                aggregate: true,
                jitter: Some(JitterScheme::default()),
            },
            ChartKind::RosterScatter => ChartSpec {
                group_by: GroupBy::Manager,
                x_axis: XAxis::Position,
                aggregate: false,
                jitter: Some(JitterScheme::default()),
            },
            ChartKind::DraftScatter => ChartSpec {
                group_by: GroupBy::Manager,
                x_axis: XAxis::PlayerCost,
                aggregate: false,
                jitter: None,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::PositionSummary => "position-summary",
            ChartKind::RosterScatter => "roster-scatter",
            ChartKind::DraftScatter => "draft-scatter",
        }
    }

    pub fn default_palette(self) -> Palette {
        match self {
            ChartKind::DraftScatter => Palette::draft_v1(),
            _ => Palette::roster_v1(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildOutput {
    pub series: Vec<Series>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn default_position_order() -> Vec<String> {
    DEFAULT_POSITION_ORDER.iter().map(|p| p.to_string()).collect()
}

pub fn position_order_from_records(records: &[Record]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    for position in records.iter().filter_map(|r| r.position.as_deref()) {
        if !order.iter().any(|p| p == position) {
            order.push(position.to_string());
        }
    }
    order
}

/// Turns records into one styled series per group. Pure: identical inputs
/// always produce identical output, and per-record problems become
/// diagnostics instead of errors.
pub fn build_series(
    records: &[Record],
    filter: &SeasonFilter,
    position_order: &[String],
    palette: &Palette,
    spec: &ChartSpec,
) -> BuildOutput {
    let mut diagnostics = Vec::new();

    let admitted = admit_records(records, filter, spec, &mut diagnostics);
    let groups = group_records(&admitted, spec.group_by);
    tracing::debug!(
        "admitted {} of {} records into {} groups",
        admitted.len(),
        records.len(),
        groups.len()
    );

    let mut series = Vec::with_capacity(groups.len());
    for (group_index, group) in groups.iter().enumerate() {
        let drafts = collect_points(group, spec);
        let mut points = place_points(drafts, position_order, &mut diagnostics);
        if points.is_empty() {
            tracing::debug!("group {:?} has no placed points; omitted", group.label);
            continue;
        }
        let x_offset = apply_jitter(&mut points, &group.label, spec);
        series.push(Series {
            label: group.label.clone(),
            points,
            style: assign_style(group_index, palette),
            x_offset,
        });
    }

    BuildOutput {
        series,
        diagnostics,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/build.rs"]
mod tests;
