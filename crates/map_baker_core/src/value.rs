//! Generic property value type (JSON-like but typed)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Generic property value (JSON-like but typed)
///
/// Authored properties come in a handful of shapes: integer enum codes,
/// floats, strings, and structured values such as a velocity vector stored
/// as an object with `x`/`y` entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Value {
    /// Get value as string reference
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get value as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// Get value as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get value as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get value as array reference
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get value as object reference
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl Value {
    /// Build an object value with `x`/`y` entries, the authored shape of
    /// vector properties such as `velocity` and `start_position`.
    pub fn vec2(x: f64, y: f64) -> Self {
        Value::Object(HashMap::from([
            ("x".to_string(), Value::Float(x)),
            ("y".to_string(), Value::Float(y)),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_float_coercion() {
        assert_eq!(Value::Int(3).as_float(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_int(), Some(2));
        assert_eq!(Value::String("3".to_string()).as_int(), None);
    }

    #[test]
    fn test_vec2_shape() {
        let v = Value::vec2(1.5, -2.0);
        let obj = v.as_object().unwrap();
        assert_eq!(obj.get("x").unwrap().as_float(), Some(1.5));
        assert_eq!(obj.get("y").unwrap().as_float(), Some(-2.0));
    }

    #[test]
    fn test_untagged_roundtrip() {
        let v = Value::Object(HashMap::from([
            ("collision".to_string(), Value::Int(1)),
            ("speed".to_string(), Value::Float(0.5)),
            ("label".to_string(), Value::from("spike")),
        ]));
        let json = serde_json::to_string(&v).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, parsed);
    }

    #[test]
    fn test_enum_code_deserializes_as_int() {
        let parsed: Value = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Value::Int(2));
        let parsed: Value = serde_json::from_str("0.1").unwrap();
        assert_eq!(parsed, Value::Float(0.1));
    }
}
