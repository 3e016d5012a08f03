//! Error types for attrview-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in attrview-core
///
/// Rendering and formatting never fail; only decoding values from their
/// persisted JSON shape does.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or mistyped JSON
    #[error("Invalid value JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
