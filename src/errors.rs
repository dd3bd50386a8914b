use std::path::PathBuf;

use thiserror::Error;

/// A chapter start time that could not be turned into `MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("cannot parse {0:?} as a time in seconds")]
    Unparseable(String),

    #[error("zero denominator in rational time {0:?}")]
    ZeroDenominator(String),
}

/// Everything that can go wrong between a user-supplied path and a finished
/// chapter report. Each variant's message is meant to be shown as-is.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("invalid chapter time: {0}")]
    Format(#[from] FormatError),

    #[error("not a well-formed XML document: {0}")]
    NotAnXmlDocument(String),

    #[error("no .fcpxml document found in package {}", .0.display())]
    DirectoryHasNoDocument(PathBuf),

    #[error("{} has the package suffix but is not a directory", .0.display())]
    PathIsNotADirectory(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractionError::Unreadable {
            path: path.into(),
            source,
        }
    }
}
