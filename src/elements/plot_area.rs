use serde::{Deserialize, Serialize};

/// Pixel interval a domain is mapped onto. `lo` maps from the domain minimum and `hi` from the
/// domain maximum, so screen Y ranges are inverted (`lo > hi`).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub lo: f64,
    pub hi: f64,
}

impl PixelRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }
}

/// Drawing surface dimensions in pixels, with the padding reserved around the plot for axes and
/// their titles.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    #[serde(default = "PlotArea::default_width")]
    pub width: f64,

    #[serde(default = "PlotArea::default_height")]
    pub height: f64,

    #[serde(default = "PlotArea::default_padding")]
    pub padding: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            padding: Self::default_padding(),
        }
    }
}

impl PlotArea {
    pub const fn default_width() -> f64 {
        1600.
    }

    pub const fn default_height() -> f64 {
        900.
    }

    pub const fn default_padding() -> f64 {
        120.
    }

    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    /// The right side keeps twice the padding to leave room for a secondary axis.
    pub fn x_range(&self) -> PixelRange {
        PixelRange::new(self.padding, self.width - 2. * self.padding)
    }

    pub fn y_range(&self) -> PixelRange {
        PixelRange::new(self.height - self.padding, self.padding)
    }

    /// Horizontal pixel position of the right-hand secondary axis.
    pub fn secondary_axis_x(&self) -> f64 {
        self.width - 2. * self.padding
    }
}
