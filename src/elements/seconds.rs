use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

/// Conversion factor from the nanoseconds recorded in benchmark CSV files to seconds.
pub const NANOS_TO_SECS: f64 = 1e-9;

#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Seconds(f64);

impl Seconds {
    pub fn new(secs: f64) -> Self {
        Self(secs)
    }

    pub fn from_nanos(nanos: f64) -> Self {
        Self(nanos * NANOS_TO_SECS)
    }

    pub fn max(lhs: Seconds, rhs: Seconds) -> Seconds {
        f64::max(lhs.0, rhs.0).into()
    }

    pub fn min(lhs: Seconds, rhs: Seconds) -> Seconds {
        f64::min(lhs.0, rhs.0).into()
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:.5?}s", self.0))
    }
}

impl AsRef<f64> for Seconds {
    fn as_ref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for Seconds {
    fn from(secs: f64) -> Self {
        Self(secs)
    }
}

impl From<Seconds> for f64 {
    fn from(secs: Seconds) -> Self {
        secs.0
    }
}

impl From<&Seconds> for f64 {
    fn from(secs: &Seconds) -> Self {
        secs.0
    }
}

impl AbsDiffEq for Seconds {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

impl RelativeEq for Seconds {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        f64::relative_eq(&self.0, &other.0, epsilon, max_relative)
    }
}
