use either::{Either, Left};
use thiserror::Error;

use super::ErrorLabel;

/// Set of errors occurring while computing axis domains or mapping records onto a plot area.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("cannot compute an axis domain over zero benchmark records")]
    EmptySeries,

    /// Domain collapsed to a single value; the caller must substitute a unit range.
    #[error("axis domain is degenerate: min and max are both {value}")]
    DegenerateDomain { value: f64 },

    #[error("logarithmic scale requires strictly positive values, but got: {value}")]
    InvalidLogInput { value: f64 },

    #[error("logarithmic scale base must be finite, positive and not 1, but got: {base}")]
    InvalidLogBase { base: f64 },
}

impl ErrorLabel for ScaleError {
    fn slug(&self) -> String {
        "scale".into()
    }

    fn next(&self) -> Either<String, Box<&dyn ErrorLabel>> {
        match self {
            Self::EmptySeries => Left("empty_series".into()),
            Self::DegenerateDomain { .. } => Left("degenerate_domain".into()),
            Self::InvalidLogInput { .. } => Left("invalid_log_input".into()),
            Self::InvalidLogBase { .. } => Left("invalid_log_base".into()),
        }
    }
}
