//! Chart datasets
//!
//! - **types**: `AppRecord`, `ChartMetric`, `ChartSeries`, `ChartOptions`, `ChartSpec`
//! - **builder**: records + metric + palette to a chart spec
//! - **summary**: aggregate statistics across apps
//! - **loader**: JSON/CSV record files
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use bankview::chart::{build_chart_spec, AppRecord, ChartMetric};
//! use bankview::palette::Palette;
//!
//! let records = vec![
//!     AppRecord::new("Bank A", 4.5, 1_000_000),
//!     AppRecord::new("Bank B", 3.8, 250_000),
//! ];
//!
//! let spec = build_chart_spec(&records, ChartMetric::Installs, &Palette::Blue);
//! assert_eq!(spec.series.labels, vec!["Bank A", "Bank B"]);
//! assert_eq!(spec.options.tooltip.render(1_000_000.0), "Installs: 1,000,000");
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod summary;
pub mod types;

pub use builder::{build_chart_series, build_chart_spec};
pub use error::{ChartError, ChartResult};
pub use loader::{load_records, records_from_csv, records_from_json};
pub use summary::AppSummary;
pub use types::{
    AppRecord, ChartMetric, ChartOptions, ChartSeries, ChartSpec, TooltipTemplate, ValueFormat,
    XAxisOptions, YAxisOptions,
};
