//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Handler option with an unusable value
    #[error("Invalid option {key}={value:?}: {reason}")]
    InvalidOption {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Sheet selected for export does not exist
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] spreet_core::Error),
}

impl From<CsvError> for spreet_core::Error {
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::Core(err) => err,
            other => spreet_core::Error::handler(other),
        }
    }
}
