mod domain;
mod plot_area;
mod record;
pub mod seconds;
mod series;

pub use domain::{AxisDomain, ScaleKind};
pub use plot_area::{PixelRange, PlotArea};
pub use record::{BenchmarkRecord, Measure};
pub use seconds::{Seconds, NANOS_TO_SECS};
pub use series::{BenchmarkSeries, SeriesColor};

pub type Point = (f64, f64);
