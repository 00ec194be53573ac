//! Error types for spreet-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a format handler
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur in spreet-core
#[derive(Debug, Error)]
pub enum Error {
    /// Address string is neither a label nor a numeric pair
    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinateFormat(String),

    /// Axis value does not fit in the coordinate half-width
    #[error("Coordinate {axis} value {value} out of range (max: {max})")]
    CoordinateOutOfRange {
        axis: &'static str,
        value: i128,
        max: u32,
    },

    /// Sheet name is empty or whitespace only
    #[error("Sheet name must be given")]
    EmptySheetName,

    /// Sheet name already used in the document
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Format identifier is not a symbolic name
    #[error("Invalid format identifier: {0:?}")]
    InvalidFormatId(String),

    /// Handler can neither read nor write
    #[error("Handler for {0:?} supports neither read nor write")]
    UnsupportedHandler(String),

    /// No registered handler matches the request
    #[error("No handler found for {target} (available: {})", .available.join(", "))]
    NoHandlerFound {
        target: String,
        available: Vec<String>,
    },

    /// Failure reported by a format handler
    #[error("Handler error: {0}")]
    Handler(#[source] HandlerError),
}

impl Error {
    /// Wrap a handler-level failure
    pub fn handler<E>(err: E) -> Self
    where
        E: Into<HandlerError>,
    {
        Error::Handler(err.into())
    }

    pub(crate) fn out_of_range(axis: &'static str, value: impl Into<i128>) -> Self {
        Error::CoordinateOutOfRange {
            axis,
            value: value.into(),
            max: crate::coordinate::AXIS_MAX,
        }
    }
}
