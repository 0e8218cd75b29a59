use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

use super::Seconds;

/// Selects which timing of a benchmark record is plotted against the Y axis.
#[derive(Debug, Display, EnumString, IntoStaticStr, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Measured,
    Expected,
}

/// One benchmark observation: the graph size and how long the run took versus how long it was
/// expected to take.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    node_count: u64,
    measured: Seconds,
    expected: Seconds,
}

impl BenchmarkRecord {
    pub fn new(node_count: u64, measured: Seconds, expected: Seconds) -> Self {
        Self { node_count, measured, expected }
    }

    /// Builds a record from the raw nanosecond timings found in benchmark CSV files.
    pub fn from_nanos(node_count: u64, measured_nanos: f64, expected_nanos: f64) -> Self {
        Self::new(
            node_count,
            Seconds::from_nanos(measured_nanos),
            Seconds::from_nanos(expected_nanos),
        )
    }

    pub fn node_count(&self) -> u64 {
        self.node_count
    }

    pub fn measured(&self) -> Seconds {
        self.measured
    }

    pub fn expected(&self) -> Seconds {
        self.expected
    }

    pub fn value(&self, measure: Measure) -> Seconds {
        match measure {
            Measure::Measured => self.measured,
            Measure::Expected => self.expected,
        }
    }

    /// Smaller of the measured and expected timings.
    pub fn low(&self) -> Seconds {
        Seconds::min(self.measured, self.expected)
    }

    /// Larger of the measured and expected timings.
    pub fn high(&self) -> Seconds {
        Seconds::max(self.measured, self.expected)
    }
}
