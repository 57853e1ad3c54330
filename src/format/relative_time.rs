//! "Time ago" strings
//!
//! Elapsed time is bucketed coarsely: the first interval (largest first)
//! that fits at least once wins. Months are a flat 30 days and years a
//! flat 365.
//!
//! Future timestamps are not special-cased. A negative delta fails every
//! bucket and falls through to the seconds branch, e.g. `-5 seconds ago`.

use chrono::{DateTime, Utc};

use super::error::{FormatError, FormatResult};

/// Interval buckets in seconds, largest first
const INTERVALS: [(i64, &str); 5] = [
    (31_536_000, "year"),
    (2_592_000, "month"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
];

/// Describe how long ago `timestamp` was, relative to the current time
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    format_relative_time_at(timestamp, Utc::now())
}

/// Describe how long before `now` the `timestamp` was
pub fn format_relative_time_at(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_milliseconds().div_euclid(1000);

    for (size, unit) in INTERVALS {
        let count = seconds.div_euclid(size);
        if count >= 1 {
            return format!("{} {}{} ago", count, unit, plural_suffix(count));
        }
    }

    // Plural unless the elapsed seconds themselves equal exactly one
    format!("{} second{} ago", seconds, plural_suffix(seconds))
}

/// Parse a timestamp given as RFC 3339 or unix milliseconds
pub fn parse_timestamp(input: &str) -> FormatResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    input
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or_else(|| FormatError::InvalidTimestamp(input.to_string()))
}

fn plural_suffix(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
