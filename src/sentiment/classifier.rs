//! Three-way sentiment classification
//!
//! A sentiment arrives either pre-labelled (`"positive"` / `"negative"`)
//! or as a polarity score in roughly `[-1, 1]`. Labels are checked before
//! scores; anything unrecognized is neutral.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::palette::{ColorPair, Rgb};

/// Scores strictly above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores strictly below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// A raw sentiment value as stored on a review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentimentValue {
    /// Numeric polarity score
    Score(f64),
    /// Pre-computed label
    Label(String),
    /// Anything else (null, bool, object...)
    Other(serde_json::Value),
}

impl From<f64> for SentimentValue {
    fn from(score: f64) -> Self {
        SentimentValue::Score(score)
    }
}

impl From<&str> for SentimentValue {
    fn from(label: &str) -> Self {
        SentimentValue::Label(label.to_string())
    }
}

impl From<String> for SentimentValue {
    fn from(label: String) -> Self {
        SentimentValue::Label(label)
    }
}

/// Sentiment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl SentimentCategory {
    /// Get all categories for iteration
    pub fn all() -> &'static [SentimentCategory] {
        &[
            SentimentCategory::Positive,
            SentimentCategory::Neutral,
            SentimentCategory::Negative,
        ]
    }

    /// Base colour for this category (modern dashboard theme)
    pub fn rgb(&self) -> Rgb {
        match self {
            SentimentCategory::Positive => Rgb::new(76, 201, 240),
            SentimentCategory::Negative => Rgb::new(247, 37, 133),
            SentimentCategory::Neutral => Rgb::new(58, 12, 163),
        }
    }

    /// Background/border pair for this category
    pub fn color(&self) -> ColorPair {
        ColorPair::from_rgb(self.rgb())
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentCategory::Positive => write!(f, "positive"),
            SentimentCategory::Neutral => write!(f, "neutral"),
            SentimentCategory::Negative => write!(f, "negative"),
        }
    }
}

/// Classification result handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentiment {
    pub category: SentimentCategory,
    pub color: ColorPair,
}

/// Classify a raw sentiment value
pub fn classify_sentiment(value: &SentimentValue) -> Sentiment {
    let category = match value {
        SentimentValue::Label(label) if label == "positive" => SentimentCategory::Positive,
        SentimentValue::Score(score) if *score > POSITIVE_THRESHOLD => SentimentCategory::Positive,
        SentimentValue::Label(label) if label == "negative" => SentimentCategory::Negative,
        SentimentValue::Score(score) if *score < NEGATIVE_THRESHOLD => SentimentCategory::Negative,
        _ => SentimentCategory::Neutral,
    };

    Sentiment {
        category,
        color: category.color(),
    }
}

/// Apply the numeric thresholds to a polarity score
pub fn categorize_score(score: f64) -> SentimentCategory {
    classify_sentiment(&SentimentValue::Score(score)).category
}

/// Category implied by a 1-5 star rating
pub fn category_from_star_rating(stars: u8) -> SentimentCategory {
    match stars {
        s if s >= 4 => SentimentCategory::Positive,
        s if s <= 2 => SentimentCategory::Negative,
        _ => SentimentCategory::Neutral,
    }
}
