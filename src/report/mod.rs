pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::charts::CategoryChart;
use crate::model::Diagnostic;
use crate::pipeline::{BuildOutput, ChartKind};
use crate::session::{ChartHandle, ChartSink, SinkError};
use json::{render_category_json, render_series_json};
use text::render_summary_text;

pub fn format_f64_6(v: f64) -> String {
    format!("{v:.6}")
}

#[derive(Debug, Clone)]
pub struct JsonDirSink {
    dir: PathBuf,
    kind: ChartKind,
    categories: Vec<String>,
    input_diagnostics: Vec<Diagnostic>,
}

impl JsonDirSink {
    pub fn new(dir: &Path, kind: ChartKind, categories: Vec<String>) -> Self {
        Self {
            dir: dir.to_path_buf(),
            kind,
            categories,
            input_diagnostics: Vec::new(),
        }
    }

    pub fn with_input_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.input_diagnostics = diagnostics;
        self
    }

    pub fn json_path(&self, handle: &ChartHandle) -> PathBuf {
        self.dir.join(format!("{}.json", handle.name()))
    }

    pub fn text_path(&self, handle: &ChartHandle) -> PathBuf {
        self.dir.join(format!("{}.txt", handle.name()))
    }
}

impl ChartSink for JsonDirSink {
    fn replace_series(
        &mut self,
        handle: &ChartHandle,
        output: &BuildOutput,
    ) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dir)?;

        let mut diagnostics = self.input_diagnostics.clone();
        diagnostics.extend(output.diagnostics.iter().cloned());

        let categories: &[String] = if self.kind.spec().x_axis.is_categorical() {
            &self.categories
        } else {
            &[]
        };
        let json = render_series_json(self.kind.name(), categories, &output.series, &diagnostics)?;
        let summary = render_summary_text(self.kind.name(), &output.series, &diagnostics);

        let json_path = self.json_path(handle);
        let text_path = self.text_path(handle);
        let json_tmp = json_path.with_extension("json.tmp");
        let text_tmp = text_path.with_extension("txt.tmp");

        // Both renderings are staged before either replaces the previous pair.
        write_text(&json_tmp, &json)?;
        if let Err(err) = write_text(&text_tmp, &summary) {
            let _ = fs::remove_file(&json_tmp);
            return Err(err.into());
        }
        fs::rename(&json_tmp, &json_path)?;
        fs::rename(&text_tmp, &text_path)?;

        tracing::debug!("wrote {}", json_path.display());
        Ok(())
    }
}

pub fn write_category_chart(
    out_dir: &Path,
    name: &str,
    chart: &CategoryChart,
) -> Result<PathBuf, SinkError> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{name}.json"));
    write_text(&path, &render_category_json(chart)?)?;
    tracing::debug!("wrote {}", path.display());
    Ok(path)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
