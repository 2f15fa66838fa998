//! Lenient coercion of dynamically typed JSON values.
//!
//! Settings files are hand-edited and were historically written by code that
//! treated every value as a loosely typed variant. These helpers never fail:
//! a value of the wrong shape coerces to the zero value of the target type.

use serde_json::{Map, Value};

/// Coerce to a 32-bit integer.
///
/// Floats are truncated, numeric strings are parsed, booleans map to 1/0.
/// Anything else, including values outside the `i32` range, yields 0.
pub fn to_int(value: &Value) -> i32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).unwrap_or(0)
            } else if let Some(f) = n.as_f64() {
                float_to_int(f)
            } else {
                0
            }
        }
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(i) => i32::try_from(i).unwrap_or(0),
                Err(_) => s.parse::<f64>().map(float_to_int).unwrap_or(0),
            }
        }
        Value::Bool(b) => i32::from(*b),
        _ => 0,
    }
}

fn float_to_int(f: f64) -> i32 {
    let t = f.trunc();
    if t.is_finite() && t >= f64::from(i32::MIN) && t <= f64::from(i32::MAX) {
        t as i32
    } else {
        0
    }
}

/// Coerce to a boolean.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        _ => false,
    }
}

/// Coerce to a string. Numbers and booleans are rendered.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce to a list of strings. A lone scalar becomes a single element.
pub fn to_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(to_string).collect(),
        Value::Null => Vec::new(),
        Value::Object(_) => Vec::new(),
        other => vec![to_string(other)],
    }
}

/// Integer under `key`, or `default` when the key is absent.
pub fn int_or(map: &Map<String, Value>, key: &str, default: i32) -> i32 {
    map.get(key).map(to_int).unwrap_or(default)
}

/// Boolean under `key`, or `default` when the key is absent.
pub fn bool_or(map: &Map<String, Value>, key: &str, default: bool) -> bool {
    map.get(key).map(to_bool).unwrap_or(default)
}

/// String under `key`, or `default` when the key is absent.
pub fn string_or(map: &Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .map(to_string)
        .unwrap_or_else(|| default.to_string())
}

/// String under `key`, empty when absent.
pub fn string(map: &Map<String, Value>, key: &str) -> String {
    string_or(map, key, "")
}

/// Copy every entry whose key is not in `known`.
pub fn extra_entries(map: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
