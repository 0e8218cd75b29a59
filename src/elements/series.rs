use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::BenchmarkRecord;

/// Colors used to tell overlaid benchmark series apart.
#[derive(Debug, Display, EnumString, EnumIter, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    Red,
    Blue,
    Green,
    Purple,
}

/// Named, colored sequence of benchmark records loaded from a single source. Records keep the
/// source row order; they are never sorted or deduplicated.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSeries {
    name: String,
    color: SeriesColor,
    records: Vec<BenchmarkRecord>,
}

impl fmt::Debug for BenchmarkSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkSeries")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("nr_records", &self.records.len())
            .finish()
    }
}

impl BenchmarkSeries {
    pub fn new(name: impl Into<String>, color: SeriesColor, records: Vec<BenchmarkRecord>) -> Self {
        Self { name: name.into(), color, records }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn color(&self) -> SeriesColor {
        self.color
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        self.records.as_slice()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a BenchmarkSeries {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
