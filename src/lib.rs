pub mod charts;
pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod session;

pub use config::ChartConfig;
pub use input::{InputError, RecordBatch};
pub use model::{Diagnostic, GroupBy, JitterScheme, Palette, Record, SeasonFilter, Series};
pub use pipeline::{BuildOutput, ChartKind, ChartSpec, build_series};
pub use session::{ChartHandle, ChartSession, ChartSink, SinkError};
