//! Field lookup over parsed JSON documents

use serde_json::Value;

/// Parse a response body, treating empty or invalid bodies as `null`
pub fn parse_document(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Resolve a JSON pointer such as `/CpuStats/0/TotalProcessorTime`.
/// The empty pointer is the document itself.
pub fn lookup<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    document.pointer(pointer)
}

pub fn number(document: &Value, path: &str) -> Option<f64> {
    lookup(document, path).and_then(Value::as_f64)
}

pub fn boolean(document: &Value, path: &str) -> Option<bool> {
    lookup(document, path).and_then(Value::as_bool)
}

pub fn string<'a>(document: &'a Value, path: &str) -> Option<&'a str> {
    lookup(document, path).and_then(Value::as_str)
}

pub fn array<'a>(document: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    lookup(document, path).and_then(Value::as_array)
}

/// Render a field as a label value. Strings are used as is, numbers and
/// booleans are printed, anything else is `None`.
pub fn label_value(document: &Value, path: &str) -> Option<String> {
    match lookup(document, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
