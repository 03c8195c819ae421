//! Display formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown when an analysis carries no timestamp
pub const MISSING_DATE: &str = "N/A";

/// Format a backend timestamp as a short `M/D/YYYY` date.
///
/// Accepts RFC 3339, naive ISO date-times (what the Python backend emits)
/// and bare dates. Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `format_date`, or `N/A` when there is no timestamp
pub fn format_optional_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) if !raw.trim().is_empty() => format_date(raw),
        _ => MISSING_DATE.to_string(),
    }
}
