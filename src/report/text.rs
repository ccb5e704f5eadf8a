use crate::model::{Diagnostic, Series};
use crate::report::format_f64_6;

pub fn render_summary_text(chart: &str, series: &[Series], diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();

    out.push_str("Chart Series Summary\n");
    out.push_str("====================\n\n");

    let n_points: usize = series.iter().map(|s| s.points.len()).sum();
    out.push_str(&format!("Chart: {chart}\n"));
    out.push_str(&format!("Series: {}\n", series.len()));
    out.push_str(&format!("Points: {n_points}\n\n"));

    out.push_str("1. Series\n");
    if series.is_empty() {
        out.push_str("(none)\n");
    }
    for s in series {
        out.push_str(&format!(
            "{}: {} points, total {}, color {}, x offset {}\n",
            s.label,
            s.points.len(),
            format_f64_6(s.points.iter().map(|p| p.y).sum()),
            s.style.color,
            format_f64_6(s.x_offset)
        ));
    }
    out.push('\n');

    let malformed = diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::MalformedRecord { .. }))
        .count();
    out.push_str("2. Diagnostics\n");
    out.push_str(&format!("Malformed records: {malformed}\n"));
    out.push_str(&format!(
        "Unknown categories: {}\n",
        diagnostics.len() - malformed
    ));
    for d in diagnostics {
        out.push_str(&format!("- {d}\n"));
    }

    out
}
