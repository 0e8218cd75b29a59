use either::{Either, Left};
use thiserror::Error;

use super::ErrorLabel;

/// Error variants related to configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// Error in configuration settings.
    #[error(transparent)]
    Configuration(#[from] config::ConfigError),

    /// Error in bootstrapping execution from configuration.
    #[error("error during system bootstrap: {message}: {setting}")]
    Bootstrap { message: String, setting: String },

    #[error("{0}")]
    IOError(#[from] std::io::Error),
}

impl ErrorLabel for SettingsError {
    fn slug(&self) -> String {
        "settings".into()
    }

    fn next(&self) -> Either<String, Box<&dyn ErrorLabel>> {
        match self {
            Self::Configuration(_) => Left("configuration".into()),
            Self::Bootstrap { .. } => Left("bootstrap".into()),
            Self::IOError(_) => Left("io".into()),
        }
    }
}
