//! Error types for the census-curate library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for census-curate operations.
///
/// None of these conditions are transient: every variant aborts the current
/// request instead of substituting a default value.
#[derive(Debug, Error)]
pub enum CurateError {
    /// Topic name or table id outside the fixed topic set.
    #[error("Unknown topic: '{0}'")]
    UnknownTopic(String),

    /// A curation rule references a column absent from a geography's row.
    #[error("Missing column '{column}' for '{label}' in geography '{geoid}'")]
    MissingColumn {
        geoid: String,
        column: String,
        label: String,
    },

    /// A legacy index is out of range for its frozen lookup list.
    #[error("Invalid migration: {field} index {index} out of range (0..{len})")]
    InvalidMigration {
        field: &'static str,
        index: i64,
        len: usize,
    },

    /// Summary level outside all_states|counties|places|metro_areas.
    #[error("Unknown summary level: '{0}'")]
    UnknownSumlevel(String),

    /// Two-letter state code not in the state FIPS table.
    #[error("Unknown state code: '{0}'")]
    UnknownStateCode(String),

    /// Parameter payload that is neither a valid v0 nor v1 payload.
    #[error("Malformed parameters: {0}")]
    MalformedParams(String),

    /// Error talking to the data source.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CurateError {
    fn from(e: reqwest::Error) -> Self {
        CurateError::Http(e.to_string())
    }
}

/// Result type alias for census-curate operations.
pub type Result<T> = std::result::Result<T, CurateError>;
