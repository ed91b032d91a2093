//! Timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp as ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2024-06-01T12:30:00.000Z`.
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
