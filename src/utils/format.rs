//! Format - Date and Currency Formatting

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::constants::{INVALID_DATE, NOT_AVAILABLE, VND_SYMBOL};

/// Naive datetime layouts accepted besides plain dates and RFC 3339
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Format an optional date string as `Mar 15, 2024`.
///
/// Absent or empty input yields `N/A`; input that is not a recognizable date
/// yields `Invalid Date`.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None | Some("") => NOT_AVAILABLE.to_string(),
        Some(raw) => match parse_date(raw) {
            Some(date) => format_naive_date(&date),
            None => INVALID_DATE.to_string(),
        },
    }
}

/// Format a date field taken straight out of a JSON payload.
///
/// Strings go through [`format_date`], numbers are epoch milliseconds,
/// null / zero / `false` count as absent.
pub fn format_date_value(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => NOT_AVAILABLE.to_string(),
        Value::String(s) => format_date(Some(s.as_str())),
        Value::Number(n) => match n.as_f64() {
            Some(ms) if ms == 0.0 => NOT_AVAILABLE.to_string(),
            Some(ms) if ms.is_finite() => DateTime::<Utc>::from_timestamp_millis(ms as i64)
                .map(|dt| format_local_date(&dt))
                .unwrap_or_else(|| INVALID_DATE.to_string()),
            _ => INVALID_DATE.to_string(),
        },
        _ => INVALID_DATE.to_string(),
    }
}

/// Format a calendar date
pub fn format_naive_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format the local calendar day of a UTC timestamp
pub fn format_local_date(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    format_naive_date(&local.date_naive())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    // Date-only input names a calendar day; never shift it through a timezone.
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Format an optional amount as Vietnamese dong, e.g. `1.000.000 ₫`.
///
/// Absent, zero and NaN amounts all render as `N/A`. Use [`format_vnd`] when
/// an explicit zero must stay visible.
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value != 0.0 && !value.is_nan() => format_vnd(value),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format any amount as Vietnamese dong.
///
/// Dong has no minor unit: the amount is rounded half away from zero and
/// grouped by thousands with `.`; the symbol follows after a no-break space.
pub fn format_vnd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        "∞".to_string()
    } else {
        group_digits(&format!("{:.0}", amount.abs().round()), '.')
    };
    format!("{sign}{digits}\u{a0}{VND_SYMBOL}")
}

/// Insert a separator every three digits, counting from the right
pub fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    result
}
