use chrono::{DateTime, Utc};

/// Get current Unix timestamp in seconds (UTC)
pub fn unix_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Format a Unix timestamp (seconds) as `%Y-%m-%d %H:%M:%S` in UTC
pub fn format_timestamp(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
