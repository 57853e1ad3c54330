//! # Bankview
//!
//! Banking App Analyzer - the presentation-data layer behind a dashboard
//! comparing banking apps by rating, install count and review sentiment.
//!
//! Every function here is a pure transformation from plain records to
//! chart-ready data. Drawing, DOM work and data fetching live elsewhere.
//!
//! ## Modules
//!
//! - [`palette`]: Deterministic colour allocation
//! - [`sentiment`]: Sentiment categories, colours and aspect breakdowns
//! - [`format`]: Relative time, abbreviated numbers, dates
//! - [`chart`]: Chart series and rendering options from app records
//! - [`ui`]: Preferences, toast and table descriptors
//! - [`export`]: Review CSV export
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use bankview::*;
//!
//! let apps = vec![
//!     AppRecord::new("First Bank", 4.6, 12_000_000),
//!     AppRecord::new("Credit Union", 4.1, 850_000),
//! ];
//!
//! let ratings = build_chart_spec(&apps, ChartMetric::Rating, &Palette::Multicolor);
//! assert_eq!(ratings.series.labels, vec!["First Bank", "Credit Union"]);
//!
//! assert_eq!(format_number(12_000_000.0), "12.0M");
//! assert_eq!(
//!     classify_sentiment(&SentimentValue::Score(0.4)).category,
//!     SentimentCategory::Positive
//! );
//! ```

pub mod chart;
pub mod config;
pub mod export;
pub mod format;
pub mod palette;
pub mod sentiment;
pub mod ui;

// Re-export top-level types for convenience
pub use palette::{
    allocate_colors, allocate_colors_checked, ColorPair, Palette, PaletteError, PaletteResult,
    Rgb, Rgba,
};

pub use sentiment::{
    categorize_score, category_from_star_rating, classify_sentiment, extract_aspects,
    AspectAnalysis, AspectSummary, ScoredReview, Sentiment, SentimentCategory, SentimentSummary,
    SentimentValue,
};

pub use format::{
    format_date, format_iso_date, format_number, format_relative_time, format_relative_time_at,
    group_thousands, parse_timestamp, to_fixed, FormatError, FormatResult,
};

pub use chart::{
    build_chart_series, build_chart_spec, load_records, AppRecord, AppSummary, ChartError,
    ChartMetric, ChartOptions, ChartResult, ChartSeries, ChartSpec, TooltipTemplate,
};

pub use ui::{
    PreferencesError, TableOptions, Theme, ToastKind, ToastSpec, UiPreferences,
};

pub use export::{export_reviews_csv, ExportError, ExportResult, ReviewRecord};

pub use config::{
    generate_default_config, Config, ConfigError, DashboardConfig, LoggingConfig,
    PreferencesConfig,
};
