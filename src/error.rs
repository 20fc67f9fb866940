// Error taxonomy for flight lookups, uploads and filesystem access.
// Malformed telemetry lines are not errors: they become warnings in ParsedFile.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FlightError {
    /// Flight identifier is not a `YYYY-MM-DD` calendar date.
    #[error("invalid flight id '{0}': expected YYYY-MM-DD")]
    Format(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlightError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FlightError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;
