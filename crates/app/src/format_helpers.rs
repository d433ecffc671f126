//! Display formatting for timestamps and amounts coming from the backend.
//!
//! Timestamps arrive as RFC 3339 strings or bare `YYYY-MM-DD` dates. Anything
//! unparseable is shown as received.

use chrono::{DateTime, NaiveDate};

/// "Jan 20, 2026".
pub fn format_date_human(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }
    match raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "Jan 20, 2026 9:35 PM", falling back to the date alone.
pub fn format_datetime_human(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => format_date_human(raw),
    }
}

/// "9:35 PM" for chat bubbles.
pub fn format_time_short(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.format("%-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Current time as RFC 3339, used to stamp locally sent messages.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Bid amounts: "$1,250.00".
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
