use std::path::PathBuf;

use either::{Either, Left};
use thiserror::Error;

use super::ErrorLabel;

/// Set of errors occurring while loading a benchmark series from its CSV source.
#[derive(Debug, Error)]
pub enum SourceLoadError {
    /// An error related to reading or deserializing the CSV source.
    #[error("Could not properly load CSV source: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to open benchmark source {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("benchmark series, {series}, is missing required column: {column}")]
    MissingColumn { series: String, column: String },

    #[error("benchmark series, {series}, has invalid {column} value on row {row}: {value}")]
    InvalidValue {
        series: String,
        row: usize,
        column: String,
        value: f64,
    },

    #[error("benchmark source load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ErrorLabel for SourceLoadError {
    fn slug(&self) -> String {
        "source".into()
    }

    fn next(&self) -> Either<String, Box<&dyn ErrorLabel>> {
        match self {
            Self::Csv(_) => Left("csv".into()),
            Self::Io { .. } => Left("io".into()),
            Self::MissingColumn { .. } => Left("missing_column".into()),
            Self::InvalidValue { .. } => Left("invalid_value".into()),
            Self::Task(_) => Left("task".into()),
        }
    }
}
