use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Marker {
    Circle,
    Triangle,
    Rect,
    RectRounded,
    RectRot,
    Star,
    Cross,
    CrossRot,
    Dash,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: String,
    pub border_color: String,
    pub marker: Marker,
    pub radius: f64,
}

impl Style {
    pub fn solid(color: &str, marker: Marker, radius: f64) -> Self {
        Self {
            color: color.to_string(),
            border_color: color.to_string(),
            marker,
            radius,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one style")]
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    styles: Vec<Style>,
}

const ROSTER_COLORS: [&str; 12] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#17a2b8", "#ff6666",
];

const ROSTER_MARKERS: [Marker; 12] = [
    Marker::Circle,
    Marker::Triangle,
    Marker::Rect,
    Marker::RectRounded,
    Marker::Star,
    Marker::Cross,
    Marker::CrossRot,
    Marker::Dash,
    Marker::Line,
    Marker::RectRot,
    Marker::Triangle,
    Marker::Circle,
];

const DRAFT_RGB: [(u8, u8, u8); 12] = [
    (54, 162, 235),
    (255, 99, 132),
    (255, 206, 86),
    (75, 192, 192),
    (153, 102, 255),
    (255, 159, 64),
    (199, 199, 199),
    (255, 99, 255),
    (99, 255, 132),
    (99, 132, 255),
    (255, 219, 102),
    (102, 255, 219),
];

impl Palette {
    pub fn new(styles: Vec<Style>) -> Result<Self, PaletteError> {
        if styles.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { styles })
    }

    pub fn roster_v1() -> Self {
        let styles = ROSTER_COLORS
            .iter()
            .zip(ROSTER_MARKERS)
            .map(|(color, marker)| Style::solid(color, marker, 8.0))
            .collect();
        Self { styles }
    }

    pub fn draft_v1() -> Self {
        let styles = DRAFT_RGB
            .iter()
            .map(|(r, g, b)| {
                Style::solid(&format!("rgba({r}, {g}, {b}, 0.7)"), Marker::Circle, 6.0)
            })
            .collect();
        Self { styles }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn style_for(&self, group_index: usize) -> &Style {
        &self.styles[group_index % self.styles.len()]
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/palette.rs"]
mod tests;
