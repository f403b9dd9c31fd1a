//! Helpers for reading loosely typed JSON from clients and models.

use serde_json::Value;

/// JSON truthiness as browsers see it: empty objects and arrays count as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text used when a JSON value is interpolated into a prompt or a label.
/// Strings go in as-is, `null` as nothing, everything else as its JSON text.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
