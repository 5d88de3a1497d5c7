//! Utilities for date and time formatting
//!
//! Provides consistent bucket labels across the dashboard

use chrono::{DateTime, NaiveDateTime};

/// Format an hour bucket label to DD.MM.YYYY HH:MM
/// Example: "2024-03-15T14:00:00Z" -> "15.03.2024 14:00"
///
/// Labels that are not timestamps are returned unchanged.
pub fn format_hour_bucket(bucket: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(bucket) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(bucket, pattern) {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
    }
    bucket.to_string()
}
