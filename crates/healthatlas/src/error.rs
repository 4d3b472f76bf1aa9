//! Error types for the HealthAtlas library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for HealthAtlas operations.
///
/// Only ingestion and file output can fail. Faults while building a derived
/// view are reported as a [`Degradation`](crate::views::Degradation) instead.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input is empty, unreadable, or lacks the columns the pipeline needs.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing the canonical cache or an export file.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl AtlasError {
    /// Whether this error means there is no dataset to serve.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            AtlasError::Io { .. }
                | AtlasError::Csv(_)
                | AtlasError::DataUnavailable(_)
                | AtlasError::InvalidDelimiter(_)
        )
    }
}

/// Result type alias for HealthAtlas operations.
pub type Result<T> = std::result::Result<T, AtlasError>;
