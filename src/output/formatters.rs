//! Reusable formatting utilities for CLI output
//!
//! Helpers for timestamps, byte sizes and optional values shared by the
//! display models and command handlers.

use chrono::{DateTime, NaiveDateTime};

/// Normalize a service timestamp to `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00.123Z`) and naive
/// `2024-05-01 10:00:00[.ffffff]` forms. Anything else is returned as-is,
/// and an empty string becomes "--".
pub fn format_timestamp(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return "--".to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, pattern) {
            return dt.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }

    timestamp.to_string()
}

/// Format a byte count for humans.
///
/// # Example output
/// - `512 B`
/// - `12.3 KB`
/// - `4.0 MB`
pub fn format_bytes(len: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let len_f = len as f64;
    if len_f >= MB {
        format!("{:.1} MB", len_f / MB)
    } else if len_f >= KB {
        format!("{:.1} KB", len_f / KB)
    } else {
        format!("{} B", len)
    }
}

/// Show "--" for missing or empty values
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}
