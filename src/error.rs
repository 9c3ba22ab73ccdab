//! Error taxonomy shared by the store, the roster and the network readers

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by library operations
#[derive(Debug, Error)]
pub enum Error {
    /// The backing file for a store does not exist
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// The requested acronym or employee is absent
    #[error("not found: {0}")]
    NotFound(String),

    /// User input that cannot be acted on
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// IO error while reading or writing a file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed or returned a non-success status
    #[error("request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A JSON response lacked an expected field
    #[error("response missing field: {0}")]
    MissingField(&'static str),
}

impl Error {
    /// Whether this error is a condition to report rather than a failure
    ///
    /// Missing files and absent records are shown to the user as plain
    /// messages and do not change the exit status.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::NotFound(_))
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;
