pub mod load;
pub mod render;
pub mod scale;

pub use load::{load_all, load_series, read_series};
pub use render::{plot, render_pass, AxisOrientation, AxisSpec, AxisTick, Renderer};
pub use scale::{compute_x_domain, compute_y_domain, map_point, map_value, overlay, PlotPoint, SeriesOverlay};
