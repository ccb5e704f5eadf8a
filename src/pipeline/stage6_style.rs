use crate::model::{Palette, Style};

pub fn assign_style(group_index: usize, palette: &Palette) -> Style {
    palette.style_for(group_index).clone()
}
