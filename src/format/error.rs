//! Formatting error types

use thiserror::Error;

/// Errors raised when formatter input cannot be interpreted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Not RFC 3339 and not unix milliseconds
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
