use chrono::{DateTime, Utc};

/// Format a timestamp as the dashboard clock (UTC, 24-hour).
pub fn format_clock(now: DateTime<Utc>) -> String {
    now.format("%H:%M:%S UTC").to_string()
}
