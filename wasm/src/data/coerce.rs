//! JavaScript-style value coercion over loosely shaped JSON records.

use serde_json::{Map, Value};

use crate::utils::format_number;

/// First key whose value is truthy text; blank strings are skipped.
pub fn first_text(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| record.get(*key).and_then(truthy_text))
}

/// First key that is present, coerced with `Number()` semantics. A `null`
/// value counts as present and coerces to 0.
pub fn first_number(record: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| record.get(*key))
        .map(to_number)
}

/// Like [`first_number`], except `null` counts as missing
pub fn non_null_number(record: &Map<String, Value>, key: &str) -> Option<f64> {
    record.get(key).filter(|value| !value.is_null()).map(to_number)
}

pub fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => n
            .as_f64()
            .filter(|v| *v != 0.0 && !v.is_nan())
            .map(format_number),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// `Number(value)` for a JSON value
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_js_number(s),
        Value::Array(items) => match items.as_slice() {
            // Arrays go through their string form: [] is "", [x] is String(x)
            [] | [Value::Null] => 0.0,
            [single @ (Value::Number(_) | Value::String(_))] => to_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// `Number(text)`: trimmed, empty is zero, radix prefixes and `Infinity`
/// accepted, anything else is NaN.
pub fn parse_js_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let decimal_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_chars || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };

    if digits.is_empty() {
        return Some(f64::NAN);
    }

    // Accumulate in f64 so literals wider than 64 bits stay finite
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
