use either::{Either, Left, Right};
use thiserror::Error;

mod scale_errors;
mod settings_errors;
mod source_errors;

pub use scale_errors::ScaleError;
pub use settings_errors::SettingsError;
pub use source_errors::SourceLoadError;

/// Stable, hierarchical label for an error, recorded as a structured field when a render pass
/// fails.
pub trait ErrorLabel {
    fn label(&self) -> String {
        match self.next() {
            Either::Right(n) => format!("{}::{}", self.slug(), n.label()),
            Either::Left(ls) => format!("{}::{}", self.slug(), ls),
        }
    }

    fn slug(&self) -> String;
    fn next(&self) -> Either<String, Box<&dyn ErrorLabel>>;
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("{0}")]
    Source(#[from] SourceLoadError),

    #[error("{0}")]
    Scale(#[from] ScaleError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("renderer failed: {0}")]
    Render(#[source] anyhow::Error),
}

impl ErrorLabel for PlotError {
    fn slug(&self) -> String {
        "plot".into()
    }

    fn next(&self) -> Either<String, Box<&dyn ErrorLabel>> {
        match self {
            Self::Source(e) => Right(Box::new(e)),
            Self::Scale(e) => Right(Box::new(e)),
            Self::Settings(e) => Right(Box::new(e)),
            Self::Render(_) => Left("render".into()),
        }
    }
}
