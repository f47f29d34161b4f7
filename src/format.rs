//! Display formatting for money, percentages and dates.
//!
//! Every function here is total: bad input degrades to a readable string
//! instead of failing the frame.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a whole-dollar amount as USD with grouped thousands, e.g. `$1,250,000`.
///
/// Amounts are rounded to the nearest dollar (halves away from zero).
/// Non-finite amounts render as `$0`.
pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round a percentage for display, halves rounding up. Non-finite values
/// (from a zero denominator) clamp to 0.
pub fn round_percent(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

/// Format a percentage as a whole number, e.g. `67%`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", round_percent(value))
}

/// Parse the ISO-8601 shapes the data document uses into a calendar date.
///
/// Timestamps keep the calendar date they were written with; no timezone
/// conversion is applied.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    for fmt in &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(stamp.date());
        }
    }
    None
}

/// Short US date, e.g. `Jan 15, 2024`. Unparseable input is shown verbatim.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format_short_date(date),
        None => raw.to_string(),
    }
}

pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Long US date, e.g. `January 15, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
