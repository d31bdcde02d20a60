//! Error types for matcher configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading matcher settings.
///
/// Matching itself is infallible; only reading configuration can fail.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read matcher settings from {}: {source}", path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid matcher settings in {}: {source}", path.display())]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
