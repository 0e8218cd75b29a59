#[cfg(test)]
#[macro_use]
extern crate static_assertions;

pub mod elements;
pub mod error;
pub mod phases;
pub mod settings;
pub mod tracing;

pub use elements::{AxisDomain, BenchmarkRecord, BenchmarkSeries, Measure, PlotArea, ScaleKind, Seconds, SeriesColor};
pub use error::PlotError;
pub use phases::render::{plot, render_pass, Renderer};
pub use phases::scale::{compute_x_domain, compute_y_domain, map_point, map_value, overlay};

pub type PlotResult<T> = Result<T, error::PlotError>;
