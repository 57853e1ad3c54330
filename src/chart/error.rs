//! Chart error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading records or resolving chart options
#[derive(Error, Debug)]
pub enum ChartError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON record file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV record file could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Metric name is not `rating` or `installs`
    #[error("Unknown metric: {0} (expected rating or installs)")]
    UnknownMetric(String),

    /// Record file extension not recognized
    #[error("Unsupported record file: {0:?} (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
