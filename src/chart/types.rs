//! Chart data types
//!
//! - `AppRecord`: one app being compared
//! - `ChartMetric`: which field is plotted
//! - `ChartSeries`: labels, values and colours, index-aligned
//! - `ChartOptions` / `ChartSpec`: declarative rendering configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ChartError;
use crate::format::{group_thousands, to_fixed};
use crate::palette::{ColorPair, Palette};

/// A banking app as shown on the comparison charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Display name, used as the bar label
    pub title: String,
    /// Average store rating, 0-5
    pub score: f64,
    /// Install count
    pub installs: u64,
    /// Number of written reviews
    #[serde(default)]
    pub reviews: u64,
}

impl AppRecord {
    pub fn new(title: impl Into<String>, score: f64, installs: u64) -> Self {
        Self {
            title: title.into(),
            score,
            installs,
            reviews: 0,
        }
    }

    /// Builder method: set review count
    pub fn reviews(mut self, reviews: u64) -> Self {
        self.reviews = reviews;
        self
    }
}

/// Metric plotted on a comparison chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    /// Store rating out of 5
    Rating,
    /// Install count
    Installs,
}

impl ChartMetric {
    /// Value plotted for one record
    pub fn value(&self, record: &AppRecord) -> f64 {
        match self {
            ChartMetric::Rating => record.score,
            ChartMetric::Installs => record.installs as f64,
        }
    }

    /// Dataset label
    pub fn label(&self) -> &'static str {
        match self {
            ChartMetric::Rating => "Rating",
            ChartMetric::Installs => "Installs",
        }
    }

    pub fn axis_title(&self) -> &'static str {
        match self {
            ChartMetric::Rating => "Rating (out of 5)",
            ChartMetric::Installs => "Number of Installs",
        }
    }

    /// Fixed upper bound of the y axis; `None` scales to the data
    pub fn y_max(&self) -> Option<f64> {
        match self {
            ChartMetric::Rating => Some(5.0),
            ChartMetric::Installs => None,
        }
    }

    pub fn tooltip(&self) -> TooltipTemplate {
        match self {
            ChartMetric::Rating => TooltipTemplate {
                prefix: self.label().to_string(),
                format: ValueFormat::Fixed {
                    decimals: 1,
                    suffix: "/5.0".to_string(),
                },
            },
            ChartMetric::Installs => TooltipTemplate {
                prefix: self.label().to_string(),
                format: ValueFormat::Grouped,
            },
        }
    }

    /// Palette used when the caller does not choose one
    pub fn default_palette(&self) -> Palette {
        match self {
            ChartMetric::Rating => Palette::Multicolor,
            ChartMetric::Installs => Palette::Blue,
        }
    }
}

impl fmt::Display for ChartMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartMetric::Rating => write!(f, "rating"),
            ChartMetric::Installs => write!(f, "installs"),
        }
    }
}

impl FromStr for ChartMetric {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(ChartMetric::Rating),
            "installs" => Ok(ChartMetric::Installs),
            other => Err(ChartError::UnknownMetric(other.to_string())),
        }
    }
}

/// Index-aligned data for one bar chart
///
/// `labels`, `values` and `colors` always have the same length as the
/// records they were built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<ColorPair>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Fill colours in label order
    pub fn background_colors(&self) -> Vec<String> {
        ColorPair::backgrounds(&self.colors)
    }

    /// Outline colours in label order
    pub fn border_colors(&self) -> Vec<String> {
        ColorPair::borders(&self.colors)
    }
}

/// How a tooltip renders the hovered value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValueFormat {
    /// Fixed decimal places followed by a suffix
    Fixed { decimals: usize, suffix: String },
    /// Thousands-grouped
    Grouped,
}

/// Tooltip label template: `"<prefix>: <value>"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipTemplate {
    pub prefix: String,
    pub format: ValueFormat,
}

impl TooltipTemplate {
    /// Tooltip text for a hovered value
    pub fn render(&self, value: f64) -> String {
        let formatted = match &self.format {
            ValueFormat::Fixed { decimals, suffix } => {
                format!("{}{}", to_fixed(value, *decimals), suffix)
            }
            ValueFormat::Grouped => group_thousands(value),
        };
        format!("{}: {}", self.prefix, formatted)
    }
}

/// Y axis configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisOptions {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub title: String,
}

/// X axis configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisOptions {
    /// Label rotation in degrees
    pub tick_rotation: u16,
}

/// Rendering configuration for a comparison bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub show_legend: bool,
    pub border_width: u32,
    pub y_axis: YAxisOptions,
    pub x_axis: XAxisOptions,
    pub tooltip: TooltipTemplate,
}

impl ChartOptions {
    /// Options for a given metric
    pub fn for_metric(metric: ChartMetric) -> Self {
        Self {
            responsive: true,
            show_legend: false,
            border_width: 1,
            y_axis: YAxisOptions {
                begin_at_zero: true,
                max: metric.y_max(),
                title: metric.axis_title().to_string(),
            },
            x_axis: XAxisOptions { tick_rotation: 45 },
            tooltip: metric.tooltip(),
        }
    }
}

/// Everything a renderer needs to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub metric: ChartMetric,
    pub palette: Palette,
    pub dataset_label: String,
    pub series: ChartSeries,
    pub options: ChartOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parsing() {
        assert_eq!("rating".parse::<ChartMetric>().unwrap(), ChartMetric::Rating);
        assert_eq!("installs".parse::<ChartMetric>().unwrap(), ChartMetric::Installs);
        assert!(matches!(
            "downloads".parse::<ChartMetric>(),
            Err(ChartError::UnknownMetric(_))
        ));
    }

    #[test]
    fn test_metric_value() {
        let record = AppRecord::new("Bank A", 4.3, 1_000_000);
        assert_eq!(ChartMetric::Rating.value(&record), 4.3);
        assert_eq!(ChartMetric::Installs.value(&record), 1_000_000.0);
    }

    #[test]
    fn test_tooltips() {
        let rating = ChartMetric::Rating.tooltip();
        assert_eq!(rating.render(4.26), "Rating: 4.3/5.0");
        assert_eq!(rating.render(4.25), "Rating: 4.3/5.0");
        assert_eq!(rating.render(3.75), "Rating: 3.8/5.0");
        assert_eq!(rating.render(5.0), "Rating: 5.0/5.0");

        let installs = ChartMetric::Installs.tooltip();
        assert_eq!(installs.render(1_234_567.0), "Installs: 1,234,567");
    }

    #[test]
    fn test_options_per_metric() {
        let rating = ChartOptions::for_metric(ChartMetric::Rating);
        assert_eq!(rating.y_axis.max, Some(5.0));
        assert!(rating.y_axis.begin_at_zero);
        assert_eq!(rating.y_axis.title, "Rating (out of 5)");

        let installs = ChartOptions::for_metric(ChartMetric::Installs);
        assert_eq!(installs.y_axis.max, None);
        assert!(installs.y_axis.begin_at_zero);
        assert!(!installs.show_legend);
        assert_eq!(installs.x_axis.tick_rotation, 45);
    }

    #[test]
    fn test_record_deserialize_default_reviews() {
        let record: AppRecord =
            serde_json::from_str(r#"{"title": "Bank A", "score": 4.1, "installs": 5000}"#).unwrap();
        assert_eq!(record.reviews, 0);
        assert_eq!(record.installs, 5000);
    }

    #[test]
    fn test_options_serialization() {
        let json = serde_json::to_value(ChartOptions::for_metric(ChartMetric::Installs)).unwrap();
        assert_eq!(json["yAxis"]["beginAtZero"], true);
        assert!(json["yAxis"].get("max").is_none());
        assert_eq!(json["tooltip"]["format"]["kind"], "grouped");
    }
}
