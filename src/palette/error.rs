//! Palette error types

use thiserror::Error;

/// Errors that can occur while allocating colours
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A colour count below zero was requested
    #[error("Invalid color count: {0} (must be non-negative)")]
    NegativeCount(i64),
}

/// Result type alias for palette operations
pub type PaletteResult<T> = Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaletteError::NegativeCount(-3);
        assert_eq!(err.to_string(), "Invalid color count: -3 (must be non-negative)");
    }
}
