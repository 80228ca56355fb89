//! Cosmetic formatting for cards and the wallet widget.

use chrono::{DateTime, Utc};

/// Buckets the elapsed time into "Just now", "{h}h ago" or "{d}d ago".
/// Hours and days are floored; timestamps in the future count as "Just now".
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// `0x1234abcd...ef01` style truncation: first 6 and last 4 characters.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
