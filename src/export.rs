//! Review export
//!
//! Writes reviews as CSV with a derived date and sentiment column:
//!
//! ```text
//! review_id,user_name,rating,text,date,sentiment
//! ```

use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use crate::format::format_iso_date;
use crate::sentiment::{category_from_star_rating, SentimentCategory};

/// Errors that can occur while exporting reviews
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// A store review as fetched for an app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub review_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    /// Star rating, 1-5
    pub rating: u8,
    #[serde(default)]
    pub text: String,
    /// Review time in unix milliseconds
    #[serde(default)]
    pub at: Option<i64>,
}

/// One exported CSV row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub review_id: String,
    pub user_name: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
    pub sentiment: SentimentCategory,
}

impl From<&ReviewRecord> for ExportRow {
    fn from(review: &ReviewRecord) -> Self {
        Self {
            review_id: review.review_id.clone(),
            user_name: review
                .user_name
                .clone()
                .unwrap_or_else(|| "Anonymous".to_string()),
            rating: review.rating,
            text: review.text.clone(),
            date: review.at.map(format_iso_date).unwrap_or_default(),
            sentiment: category_from_star_rating(review.rating),
        }
    }
}

/// Write reviews as CSV, header first
pub fn export_reviews_csv<W: Write>(writer: W, reviews: &[ReviewRecord]) -> ExportResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if reviews.is_empty() {
        // serde only emits the header alongside the first row
        csv_writer.write_record(["review_id", "user_name", "rating", "text", "date", "sentiment"])?;
    }

    for review in reviews {
        csv_writer.serialize(ExportRow::from(review))?;
    }
    csv_writer.flush()?;

    tracing::info!("Exported {} reviews", reviews.len());
    Ok(reviews.len())
}
