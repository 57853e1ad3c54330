//! Calendar date display

use chrono::{DateTime, Utc};

/// Long date, e.g. `March 05, 2024`
pub fn format_date(timestamp_ms: i64) -> String {
    format_with(timestamp_ms, "%B %d, %Y")
}

/// ISO date, e.g. `2024-03-05`
pub fn format_iso_date(timestamp_ms: i64) -> String {
    format_with(timestamp_ms, "%Y-%m-%d")
}

fn format_with(timestamp_ms: i64, pattern: &str) -> String {
    // Out-of-range timestamps are shown as-is
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        // 2024-03-05T10:30:00Z
        assert_eq!(format_date(1_709_634_600_000), "March 05, 2024");
        assert_eq!(format_iso_date(1_709_634_600_000), "2024-03-05");
        assert_eq!(format_date(0), "January 01, 1970");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(format_date(i64::MAX), i64::MAX.to_string());
    }
}
