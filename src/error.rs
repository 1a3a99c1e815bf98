//! Error type for settings I/O.

use thiserror::Error;

/// Failure while reading, writing or parsing snap settings
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The settings file could not be read or written
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    /// The settings document is not valid JSON for [`SnapSettings`](crate::SnapSettings)
    #[error("settings json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for fallible settings operations
pub type Result<T> = std::result::Result<T, Error>;
