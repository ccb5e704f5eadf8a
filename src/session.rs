use thiserror::Error;

use crate::model::{Palette, Record, SeasonFilter};
use crate::pipeline::{BuildOutput, ChartSpec, build_series};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartHandle(String);

impl ChartHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rendering side of the builder. `replace_series` is the only way a
/// rendered chart changes; it always receives a complete rebuild.
pub trait ChartSink {
    fn replace_series(&mut self, handle: &ChartHandle, output: &BuildOutput)
    -> Result<(), SinkError>;
}

pub struct ChartSession<S: ChartSink> {
    handle: ChartHandle,
    records: Vec<Record>,
    position_order: Vec<String>,
    palette: Palette,
    spec: ChartSpec,
    filter: SeasonFilter,
    sink: S,
}

impl<S: ChartSink> ChartSession<S> {
    pub fn new(
        handle: ChartHandle,
        records: Vec<Record>,
        position_order: Vec<String>,
        palette: Palette,
        spec: ChartSpec,
        sink: S,
    ) -> Self {
        Self {
            handle,
            records,
            position_order,
            palette,
            spec,
            filter: SeasonFilter::All,
            sink,
        }
    }

    pub fn handle(&self) -> &ChartHandle {
        &self.handle
    }

    pub fn filter(&self) -> &SeasonFilter {
        &self.filter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn apply_filter(&mut self, filter: SeasonFilter) -> Result<BuildOutput, SinkError> {
        self.filter = filter;
        let output = build_series(
            &self.records,
            &self.filter,
            &self.position_order,
            &self.palette,
            &self.spec,
        );
        tracing::info!(
            "chart {}: {} series, {} diagnostics",
            self.handle.name(),
            output.series.len(),
            output.diagnostics.len()
        );
        self.sink.replace_series(&self.handle, &output)?;
        Ok(output)
    }

    pub fn on_filter_change(&mut self, filter: SeasonFilter) -> bool {
        match self.apply_filter(filter) {
            Ok(_) => true,
            Err(err) => {
                tracing::error!("chart {} not updated: {err}", self.handle.name());
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
