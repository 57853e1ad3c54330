//! UI preference error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing UI preferences
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Failed to access preferences file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse preferences file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for preference operations
pub type PreferencesResult<T> = Result<T, PreferencesError>;
