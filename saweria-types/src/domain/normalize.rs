//! Field normalization for loosely typed provider values.
//!
//! Every text field of a normalized result goes through [`text`], so the response schema
//! never carries `null` where a string is expected.

use serde_json::{Number, Value};

/// Whether a value takes part in a fallback chain.
///
/// `null`, `false`, `0` and `""` are skipped, so a chain over several candidate keys
/// settles on the first value that actually carries data.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Converts an optional value to its string form. Absent or `null` yields `""`.
pub fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Strict numeric conversion.
///
/// JSON numbers pass through. Strings are trimmed and accepted when they parse to a
/// finite number; integral strings stay integral. Anything else is absent.
pub fn number(value: Option<&Value>) -> Option<Number> {
    match value? {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => parse_number(s.trim()),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if s.is_empty() {
        return None;
    }
    if let Ok(int) = s.parse::<i64>() {
        return Some(Number::from(int));
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
}
