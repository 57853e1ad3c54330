//! Aggregate sentiment over a set of reviews

use serde::{Deserialize, Serialize};

use super::classifier::{categorize_score, SentimentCategory};

/// A review with text-derived polarity, as produced by the analysis job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    #[serde(default, alias = "reviewId")]
    pub review_id: String,
    #[serde(default)]
    pub content: String,
    /// Polarity in [-1, 1]; missing scores count as 0
    #[serde(default)]
    pub sentiment_score: f64,
}

impl ScoredReview {
    pub fn new(review_id: impl Into<String>, content: impl Into<String>, sentiment_score: f64) -> Self {
        Self {
            review_id: review_id.into(),
            content: content.into(),
            sentiment_score,
        }
    }
}

/// Category counts and mean polarity for a batch of reviews
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    /// Mean polarity; 0 for an empty batch
    pub avg_sentiment: f64,
}

impl SentimentSummary {
    /// Summarize polarity scores
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut summary = Self::default();
        if scores.is_empty() {
            return summary;
        }

        for &score in scores {
            match categorize_score(score) {
                SentimentCategory::Positive => summary.positive_count += 1,
                SentimentCategory::Neutral => summary.neutral_count += 1,
                SentimentCategory::Negative => summary.negative_count += 1,
            }
        }
        summary.avg_sentiment = scores.iter().sum::<f64>() / scores.len() as f64;

        summary
    }

    /// Summarize the scores of a batch of reviews
    pub fn from_reviews(reviews: &[ScoredReview]) -> Self {
        let scores: Vec<f64> = reviews.iter().map(|r| r.sentiment_score).collect();
        Self::from_scores(&scores)
    }

    pub fn total(&self) -> usize {
        self.positive_count + self.neutral_count + self.negative_count
    }

    /// Count for one category
    pub fn count(&self, category: SentimentCategory) -> usize {
        match category {
            SentimentCategory::Positive => self.positive_count,
            SentimentCategory::Neutral => self.neutral_count,
            SentimentCategory::Negative => self.negative_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let summary = SentimentSummary::from_scores(&[0.5, 0.1, -0.3, 0.0, 0.9]);

        assert_eq!(summary.positive_count, 2);
        assert_eq!(summary.neutral_count, 2);
        assert_eq!(summary.negative_count, 1);
        assert_eq!(summary.total(), 5);
        assert!((summary.avg_sentiment - 0.24).abs() < 1e-9);
    }

    #[test]
    fn test_summary_from_reviews() {
        let reviews: Vec<ScoredReview> = serde_json::from_str(
            r#"[
                {"reviewId": "r1", "content": "Great app", "sentiment_score": 0.8},
                {"review_id": "r2", "content": "Meh"},
                {"reviewId": "r3", "sentiment_score": -0.6}
            ]"#,
        )
        .unwrap();

        assert_eq!(reviews[1].sentiment_score, 0.0);
        assert_eq!(reviews[2].content, "");

        let summary = SentimentSummary::from_reviews(&reviews);
        assert_eq!(summary.count(SentimentCategory::Positive), 1);
        assert_eq!(summary.count(SentimentCategory::Neutral), 1);
        assert_eq!(summary.count(SentimentCategory::Negative), 1);
        assert!((summary.avg_sentiment - 0.2 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = SentimentSummary::from_scores(&[]);
        assert_eq!(summary, SentimentSummary::default());
        assert_eq!(summary.avg_sentiment, 0.0);
    }
}
