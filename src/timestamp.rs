//! Reported-at parsing.
//!
//! Timestamps travel as ISO-8601 strings. Anything that fails to parse sorts
//! as the Unix epoch and is left out of time-window aggregation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse an ISO-8601 timestamp. Accepts RFC 3339 with an offset, a naive
/// date-time (taken as UTC) and a bare date (midnight UTC).
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Milliseconds since the epoch, or 0 when unparsable.
pub fn sort_key(raw: &str) -> i64 {
    parse(raw).map(|dt| dt.timestamp_millis()).unwrap_or(0)
}

/// The canonical wire form, e.g. `2025-04-01T14:30:00.000Z`.
pub fn format(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
