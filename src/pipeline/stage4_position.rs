use crate::model::{Diagnostic, Point};
use crate::pipeline::stage3_aggregate::{DraftPoint, XValue};

pub fn place_points(
    drafts: Vec<DraftPoint>,
    position_order: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let x = match draft.x {
            XValue::Numeric(x) => x,
            XValue::Category(position) => match category_index(position_order, &position) {
                Some(idx) => idx as f64,
                None => {
                    let diag = Diagnostic::UnknownCategory {
                        index: draft.index,
                        position,
                    };
                    diag.log();
                    diagnostics.push(diag);
                    continue;
                }
            },
        };
        points.push(Point {
            x,
            y: draft.y,
            meta: draft.meta,
        });
    }
    points
}

pub fn category_index(position_order: &[String], position: &str) -> Option<usize> {
    position_order.iter().position(|p| p == position)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_position.rs"]
mod tests;
