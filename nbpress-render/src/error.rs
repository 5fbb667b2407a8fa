//! Error types for notebook conversion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single notebook could not be converted.
///
/// Both kinds are local to one notebook; the batch driver logs them and
/// moves on to the next entry.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The declared source file does not exist or could not be read
    #[error("notebook source '{}' is missing: {source}", path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a notebook document
    #[error("notebook '{}' is malformed: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },
}

impl ConvertError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ConvertError::MalformedDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Failure of one entry in a batch run.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The entry itself is unusable (blank slug or source)
    #[error("invalid notebook entry: {0}")]
    InvalidEntry(String),

    /// The HTML was rendered but could not be stored
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
