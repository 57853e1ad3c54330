//! Aspect-level sentiment
//!
//! Reviews are matched against keyword lists per aspect (UI, performance,
//! ads, ...). Every aspect a review mentions inherits that review's
//! polarity, so one review can count toward several aspects.

use serde::Serialize;

use super::classifier::SentimentCategory;
use super::summary::ScoredReview;

/// Keyword lists per app aspect, in reporting order
pub const APP_ASPECTS: &[(&str, &[&str])] = &[
    (
        "ui",
        &[
            "ui", "interface", "design", "layout", "screen", "theme", "color", "dark mode",
            "light mode", "appearance", "look", "visual",
        ],
    ),
    (
        "performance",
        &[
            "performance", "speed", "fast", "slow", "lag", "crash", "hang", "freeze", "loading",
            "battery", "memory", "responsive",
        ],
    ),
    (
        "usability",
        &[
            "usability", "user-friendly", "easy", "difficult", "simple", "complex", "intuitive",
            "confusing", "navigation", "accessible",
        ],
    ),
    (
        "features",
        &[
            "feature", "function", "functionality", "capability", "option", "setting", "tool",
            "ability", "control",
        ],
    ),
    (
        "reliability",
        &[
            "reliable", "stability", "stable", "consistent", "dependable", "error", "bug",
            "issue", "problem", "glitch", "fix",
        ],
    ),
    (
        "updates",
        &[
            "update", "upgrade", "version", "release", "improvement", "enhancement", "change",
            "new", "latest",
        ],
    ),
    (
        "content",
        &[
            "content", "post", "photo", "video", "story", "feed", "timeline", "quality",
            "relevance", "recommendation",
        ],
    ),
    (
        "privacy",
        &[
            "privacy", "security", "data", "permission", "tracking", "safe", "secure",
            "protection", "personal",
        ],
    ),
    (
        "ads",
        &[
            "ad", "ads", "advertisement", "commercial", "promotion", "sponsored", "marketing",
            "popup",
        ],
    ),
];

/// Most frequent keywords reported per aspect
pub const TOP_KEYWORDS: usize = 5;

/// Sign rule: any positive score is positive, any negative score negative
fn category_from_sign(score: f64) -> SentimentCategory {
    if score > 0.0 {
        SentimentCategory::Positive
    } else if score < 0.0 {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Mention counts and mean polarity for one aspect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectStats {
    pub aspect: String,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub total: usize,
    /// Mean polarity of the mentioning reviews; 0 when never mentioned
    pub avg_sentiment: f64,
    /// Up to five keywords, most frequent first
    pub keywords: Vec<KeywordCount>,
}

impl AspectStats {
    fn empty(aspect: &str) -> Self {
        Self {
            aspect: aspect.to_string(),
            positive: 0,
            neutral: 0,
            negative: 0,
            total: 0,
            avg_sentiment: 0.0,
            keywords: Vec::new(),
        }
    }

    fn record(&mut self, category: SentimentCategory, score: f64) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Neutral => self.neutral += 1,
            SentimentCategory::Negative => self.negative += 1,
        }
        self.total += 1;
        self.avg_sentiment += score;
    }

    pub fn positive_ratio(&self) -> f64 {
        ratio(self.positive, self.total)
    }

    pub fn negative_ratio(&self) -> f64 {
        ratio(self.negative, self.total)
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// One aspect found in one review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectMention {
    pub aspect: String,
    pub sentiment: SentimentCategory,
    pub score: f64,
    /// Matched keywords in keyword-list order
    pub keywords: Vec<String>,
}

/// Aspects found in one review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewAspects {
    pub review_id: String,
    pub aspects: Vec<AspectMention>,
}

/// Result of matching a batch of reviews against the aspect keywords
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectAnalysis {
    /// Every configured aspect, mentioned or not, in table order
    pub aspects: Vec<AspectStats>,
    /// Reviews that mentioned at least one aspect
    pub review_aspects: Vec<ReviewAspects>,
}

impl AspectAnalysis {
    /// Stats for one aspect by name
    pub fn get(&self, aspect: &str) -> Option<&AspectStats> {
        self.aspects.iter().find(|stats| stats.aspect == aspect)
    }
}

/// Match reviews against [`APP_ASPECTS`]
pub fn extract_aspects(reviews: &[ScoredReview]) -> AspectAnalysis {
    extract_aspects_with(reviews, APP_ASPECTS)
}

/// Match reviews against a custom aspect keyword table
///
/// Matching is a case-insensitive substring test, so `"ad"` also hits
/// `"loading"`. Reviews with empty content are skipped.
pub fn extract_aspects_with(
    reviews: &[ScoredReview],
    aspect_keywords: &[(&str, &[&str])],
) -> AspectAnalysis {
    let mut aspects: Vec<AspectStats> = aspect_keywords
        .iter()
        .map(|(aspect, _)| AspectStats::empty(aspect))
        .collect();
    // Keyword tallies per aspect, first-seen order
    let mut tallies: Vec<Vec<(&str, usize)>> = vec![Vec::new(); aspect_keywords.len()];
    let mut review_aspects = Vec::new();

    for review in reviews {
        if review.content.is_empty() {
            continue;
        }
        let content = review.content.to_lowercase();
        let category = category_from_sign(review.sentiment_score);

        let mut mentions = Vec::new();
        for (idx, (aspect, keywords)) in aspect_keywords.iter().enumerate() {
            let found: Vec<&str> = keywords
                .iter()
                .copied()
                .filter(|keyword| content.contains(*keyword))
                .collect();
            if found.is_empty() {
                continue;
            }

            aspects[idx].record(category, review.sentiment_score);
            for keyword in &found {
                match tallies[idx].iter().position(|(k, _)| k == keyword) {
                    Some(pos) => tallies[idx][pos].1 += 1,
                    None => tallies[idx].push((*keyword, 1)),
                }
            }

            mentions.push(AspectMention {
                aspect: aspect.to_string(),
                sentiment: category,
                score: review.sentiment_score,
                keywords: found.iter().map(|k| k.to_string()).collect(),
            });
        }

        if !mentions.is_empty() {
            review_aspects.push(ReviewAspects {
                review_id: review.review_id.clone(),
                aspects: mentions,
            });
        }
    }

    for (stats, mut tally) in aspects.iter_mut().zip(tallies) {
        if stats.total > 0 {
            stats.avg_sentiment /= stats.total as f64;
        }
        // Stable: equal counts keep first-seen order
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        stats.keywords = tally
            .into_iter()
            .take(TOP_KEYWORDS)
            .map(|(keyword, count)| KeywordCount {
                keyword: keyword.to_string(),
                count,
            })
            .collect();
    }

    tracing::debug!(
        "Aspect extraction: {} reviews, {} with aspects",
        reviews.len(),
        review_aspects.len()
    );

    AspectAnalysis {
        aspects,
        review_aspects,
    }
}

/// One row of the aspect ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectRanking {
    pub aspect: String,
    pub sentiment_score: f64,
    pub total_mentions: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
}

/// Headline figures for the aspect chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectSummary {
    pub most_positive_aspect: Option<String>,
    pub most_negative_aspect: Option<String>,
    pub most_mentioned_aspect: Option<String>,
    /// Number of configured aspects, mentioned or not
    pub aspect_count: usize,
    /// Mentioned aspects, highest mean polarity first
    pub aspects_by_sentiment: Vec<AspectRanking>,
}

impl AspectSummary {
    /// Summarize an analysis. Ties go to the aspect listed first.
    pub fn from_analysis(analysis: &AspectAnalysis) -> Self {
        let mut most_positive: Option<(&str, f64)> = None;
        let mut most_negative: Option<(&str, f64)> = None;
        let mut most_mentioned: Option<(&str, usize)> = None;
        let mut ranking = Vec::new();

        for stats in analysis.aspects.iter().filter(|s| s.total > 0) {
            let positive_ratio = stats.positive_ratio();
            let negative_ratio = stats.negative_ratio();

            if most_positive.map_or(true, |(_, best)| positive_ratio > best) {
                most_positive = Some((stats.aspect.as_str(), positive_ratio));
            }
            if most_negative.map_or(true, |(_, best)| negative_ratio > best) {
                most_negative = Some((stats.aspect.as_str(), negative_ratio));
            }
            if most_mentioned.map_or(true, |(_, best)| stats.total > best) {
                most_mentioned = Some((stats.aspect.as_str(), stats.total));
            }

            ranking.push(AspectRanking {
                aspect: stats.aspect.clone(),
                sentiment_score: stats.avg_sentiment,
                total_mentions: stats.total,
                positive_ratio,
                negative_ratio,
            });
        }

        ranking.sort_by(|a, b| b.sentiment_score.total_cmp(&a.sentiment_score));

        Self {
            most_positive_aspect: most_positive.map(|(aspect, _)| aspect.to_string()),
            most_negative_aspect: most_negative.map(|(aspect, _)| aspect.to_string()),
            most_mentioned_aspect: most_mentioned.map(|(aspect, _)| aspect.to_string()),
            aspect_count: analysis.aspects.len(),
            aspects_by_sentiment: ranking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reviews() -> Vec<ScoredReview> {
        vec![
            ScoredReview::new("r1", "Love the NEW dark mode design", 0.6),
            ScoredReview::new("r2", "Crashes constantly and the design is confusing", -0.5),
            ScoredReview::new("r3", "", 0.9),
            ScoredReview::new("r4", "It works", 0.0),
            ScoredReview::new("r5", "Great features", 0.0),
        ]
    }

    #[test]
    fn test_extract_counts_per_aspect() {
        let analysis = extract_aspects(&sample_reviews());
        assert_eq!(analysis.aspects.len(), APP_ASPECTS.len());

        let ui = analysis.get("ui").unwrap();
        assert_eq!((ui.positive, ui.neutral, ui.negative, ui.total), (1, 0, 1, 2));
        assert!((ui.avg_sentiment - 0.05).abs() < 1e-9);
        assert_eq!(
            ui.keywords,
            vec![
                KeywordCount { keyword: "design".into(), count: 2 },
                KeywordCount { keyword: "dark mode".into(), count: 1 },
            ]
        );

        let performance = analysis.get("performance").unwrap();
        assert_eq!(performance.negative, 1);
        assert_eq!(performance.avg_sentiment, -0.5);

        let features = analysis.get("features").unwrap();
        assert_eq!((features.neutral, features.total), (1, 1));

        let reliability = analysis.get("reliability").unwrap();
        assert_eq!(reliability.total, 0);
        assert_eq!(reliability.avg_sentiment, 0.0);
        assert!(reliability.keywords.is_empty());
    }

    #[test]
    fn test_review_mentions() {
        let analysis = extract_aspects(&sample_reviews());

        // r3 is empty and r4 matches nothing
        let ids: Vec<&str> = analysis
            .review_aspects
            .iter()
            .map(|r| r.review_id.as_str())
            .collect();
        assert_eq!(ids, vec!["r1", "r2", "r5"]);

        let first = &analysis.review_aspects[0];
        let names: Vec<&str> = first.aspects.iter().map(|m| m.aspect.as_str()).collect();
        assert_eq!(names, vec!["ui", "updates"]);
        assert_eq!(first.aspects[0].keywords, vec!["design", "dark mode"]);
        assert_eq!(first.aspects[0].sentiment, SentimentCategory::Positive);
    }

    #[test]
    fn test_sign_rule_ignores_thresholds() {
        // 0.05 is neutral for the classifier but positive here
        let analysis = extract_aspects(&[
            ScoredReview::new("a", "slow", 0.05),
            ScoredReview::new("b", "slow", -0.01),
        ]);
        let performance = analysis.get("performance").unwrap();
        assert_eq!(performance.positive, 1);
        assert_eq!(performance.negative, 1);
        assert_eq!(performance.neutral, 0);
    }

    #[test]
    fn test_keywords_capped_at_five() {
        let analysis = extract_aspects(&[ScoredReview::new(
            "r",
            "ui interface design layout screen theme",
            0.2,
        )]);
        let keywords: Vec<&str> = analysis
            .get("ui")
            .unwrap()
            .keywords
            .iter()
            .map(|k| k.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["ui", "interface", "design", "layout", "screen"]);
    }

    #[test]
    fn test_custom_keyword_table() {
        let table: &[(&str, &[&str])] = &[("login", &["login", "password", "face id"])];
        let analysis = extract_aspects_with(
            &[
                ScoredReview::new("a", "Face ID login is broken", -0.7),
                ScoredReview::new("b", "Forgot my password twice", -0.1),
            ],
            table,
        );

        assert_eq!(analysis.aspects.len(), 1);
        let login = analysis.get("login").unwrap();
        assert_eq!(login.total, 2);
        assert_eq!(login.keywords[0], KeywordCount { keyword: "login".into(), count: 1 });
        assert!(analysis.get("ui").is_none());
    }

    #[test]
    fn test_summary() {
        let summary = AspectSummary::from_analysis(&extract_aspects(&sample_reviews()));

        assert_eq!(summary.aspect_count, APP_ASPECTS.len());
        assert_eq!(summary.most_positive_aspect.as_deref(), Some("updates"));
        assert_eq!(summary.most_negative_aspect.as_deref(), Some("performance"));
        assert_eq!(summary.most_mentioned_aspect.as_deref(), Some("ui"));

        let order: Vec<&str> = summary
            .aspects_by_sentiment
            .iter()
            .map(|r| r.aspect.as_str())
            .collect();
        assert_eq!(order, vec!["updates", "ui", "features", "performance", "usability"]);

        let ui = &summary.aspects_by_sentiment[1];
        assert_eq!(ui.total_mentions, 2);
        assert_eq!(ui.positive_ratio, 0.5);
        assert_eq!(ui.negative_ratio, 0.5);
    }

    #[test]
    fn test_summary_without_mentions() {
        let summary = AspectSummary::from_analysis(&extract_aspects(&[]));
        assert_eq!(summary.most_positive_aspect, None);
        assert_eq!(summary.most_negative_aspect, None);
        assert_eq!(summary.most_mentioned_aspect, None);
        assert_eq!(summary.aspect_count, APP_ASPECTS.len());
        assert!(summary.aspects_by_sentiment.is_empty());
    }
}
