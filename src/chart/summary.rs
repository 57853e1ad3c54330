//! Aggregate statistics across compared apps

use serde::Serialize;

use super::types::AppRecord;

/// Summary row shown above the comparison charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSummary {
    pub count: usize,
    pub avg_rating: f64,
    pub max_rating: f64,
    pub min_rating: f64,
    pub avg_installs: f64,
    pub total_installs: u64,
    pub avg_reviews: f64,
    pub total_reviews: u64,
}

impl AppSummary {
    /// Summarize a set of records; `None` when there are none
    pub fn from_records(records: &[AppRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let count = records.len();
        let n = count as f64;

        let total_rating: f64 = records.iter().map(|r| r.score).sum();
        let max_rating = records.iter().map(|r| r.score).fold(f64::NEG_INFINITY, f64::max);
        let min_rating = records.iter().map(|r| r.score).fold(f64::INFINITY, f64::min);
        let total_installs: u64 = records.iter().map(|r| r.installs).sum();
        let total_reviews: u64 = records.iter().map(|r| r.reviews).sum();

        Some(Self {
            count,
            avg_rating: total_rating / n,
            max_rating,
            min_rating,
            avg_installs: total_installs as f64 / n,
            total_installs,
            avg_reviews: total_reviews as f64 / n,
            total_reviews,
        })
    }
}
