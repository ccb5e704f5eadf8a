pub mod diagnostics;
pub mod jitter;
pub mod palette;
pub mod record;
pub mod series;

pub use diagnostics::Diagnostic;
pub use jitter::JitterScheme;
pub use palette::{Marker, Palette, PaletteError, Style};
pub use record::{GroupBy, Record, SeasonFilter};
pub use series::{Point, PointMeta, Series};
