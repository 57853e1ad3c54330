//! Human-readable formatting for dashboard values
//!
//! - **relative_time**: "3 hours ago"
//! - **number**: "1.5K", "1,234,567"
//! - **date**: "March 05, 2024"

pub mod date;
pub mod error;
pub mod number;
pub mod relative_time;

pub use date::{format_date, format_iso_date};
pub use error::{FormatError, FormatResult};
pub use number::{format_number, group_thousands, to_fixed};
pub use relative_time::{format_relative_time, format_relative_time_at, parse_timestamp};
