//! Review sentiment
//!
//! - **classifier**: label/score to category and colour
//! - **summary**: per-category counts over a batch of reviews
//! - **aspects**: keyword-matched aspects (UI, performance, ads, ...) per review

pub mod aspects;
pub mod classifier;
pub mod summary;

pub use aspects::{
    extract_aspects, extract_aspects_with, AspectAnalysis, AspectMention, AspectRanking,
    AspectStats, AspectSummary, KeywordCount, ReviewAspects, APP_ASPECTS,
};
pub use classifier::{
    categorize_score, category_from_star_rating, classify_sentiment, Sentiment,
    SentimentCategory, SentimentValue, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use summary::{ScoredReview, SentimentSummary};
