//! WASM-compatible time and number utilities
//!
//! Timestamp parsing is shared by both targets. Display formatting uses the
//! browser locale in WASM and a fixed UTC layout in native builds.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::constants::EMPTY_CELL;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a timestamp into milliseconds since the Unix epoch.
///
/// Accepts RFC 3339, zone-less date-times (read as UTC), bare dates (UTC
/// midnight) and epoch milliseconds written as a run of digits. Returns `None`
/// for anything else.
pub fn parse_timestamp(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // Numeric dates arrive as text after normalization; four digits is a year
    if text.len() > 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse::<i64>().ok();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
}

/// Render a submission date for a table cell.
///
/// Missing dates show the empty-cell marker; unparseable ones are shown as-is.
pub fn format_date(date: Option<&str>) -> String {
    let Some(text) = date.filter(|d| !d.trim().is_empty()) else {
        return EMPTY_CELL.to_string();
    };

    match parse_timestamp(text) {
        Some(millis) => format_millis(millis).unwrap_or_else(|| text.to_string()),
        None => text.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn format_millis(millis: i64) -> Option<String> {
    // Browser locale, same as Date.prototype.toLocaleString
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis as f64));
    Some(String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)))
}

#[cfg(not(target_arch = "wasm32"))]
fn format_millis(millis: i64) -> Option<String> {
    DateTime::<chrono::Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Format a number the way JavaScript's `String(number)` does for the values
/// a leaderboard carries.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        value.to_string()
    }
}
