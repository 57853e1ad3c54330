//! Chart dataset construction
//!
//! ```text
//!   [AppRecord] ──► labels (title, input order)
//!               ──► values (metric field)
//!               ──► colors (allocate_colors(len, palette))
//! ```
//!
//! Records are never sorted or deduplicated; duplicate titles produce
//! duplicate bars.

use super::types::{AppRecord, ChartMetric, ChartOptions, ChartSeries, ChartSpec};
use crate::palette::{allocate_colors, Palette};

/// Build the index-aligned series for one metric
pub fn build_chart_series(records: &[AppRecord], metric: ChartMetric, palette: &Palette) -> ChartSeries {
    let labels = records.iter().map(|r| r.title.clone()).collect();
    let values = records.iter().map(|r| metric.value(r)).collect();
    let colors = allocate_colors(records.len(), palette);

    tracing::debug!(
        "Built {} series: {} records, {} palette",
        metric,
        records.len(),
        palette
    );

    ChartSeries {
        labels,
        values,
        colors,
    }
}

/// Build the series together with its rendering configuration
pub fn build_chart_spec(records: &[AppRecord], metric: ChartMetric, palette: &Palette) -> ChartSpec {
    ChartSpec {
        metric,
        palette: *palette,
        dataset_label: metric.label().to_string(),
        series: build_chart_series(records, metric, palette),
        options: ChartOptions::for_metric(metric),
    }
}
