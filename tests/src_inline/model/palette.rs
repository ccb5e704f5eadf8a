use super::*;

#[test]
fn test_empty_palette_rejected() {
    assert_eq!(Palette::new(Vec::new()), Err(PaletteError::Empty));
}

#[test]
fn test_style_for_cycles_past_palette_length() {
    let palette = Palette::new(vec![
        Style::solid("red", Marker::Circle, 4.0),
        Style::solid("blue", Marker::Star, 4.0),
        Style::solid("green", Marker::Dash, 4.0),
    ])
    .unwrap();
    let colors: Vec<&str> = (0..7).map(|i| palette.style_for(i).color.as_str()).collect();
    assert_eq!(colors, ["red", "blue", "green", "red", "blue", "green", "red"]);
}

#[test]
fn test_builtin_palettes() {
    let roster = Palette::roster_v1();
    assert_eq!(roster.len(), 12);
    assert_eq!(roster.style_for(0).color, "#1f77b4");
    assert_eq!(roster.style_for(1).marker, Marker::Triangle);
    assert_eq!(roster.style_for(0).radius, 8.0);

    let draft = Palette::draft_v1();
    assert_eq!(draft.len(), 12);
    assert_eq!(draft.style_for(0).color, "rgba(54, 162, 235, 0.7)");
    assert_eq!(draft.style_for(0).border_color, "rgba(54, 162, 235, 0.7)");
    assert_eq!(draft.style_for(13).color, draft.style_for(1).color);
}

#[test]
fn test_marker_names_match_renderer() {
    let json = serde_json::to_string(&[Marker::RectRounded, Marker::CrossRot, Marker::Circle]).unwrap();
    assert_eq!(json, r#"["rectRounded","crossRot","circle"]"#);
}
