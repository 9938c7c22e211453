// models/src/properties.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

// f64 does not implement `Eq` or `Hash` directly, so edge and filter values
// carry floats in a wrapper compared by bit pattern.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializableFloat(pub f64);

impl PartialEq for SerializableFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for SerializableFloat {}

impl Hash for SerializableFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// A scalar property value, as carried by edge properties and query filters.
///
/// Variant order matters for `untagged` decoding: integers are tried before
/// floats so `3` stays an `Integer`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Integer(i64),
    Float(SerializableFloat),
    String(String),
}

impl PropertyValue {
    /// Compares this value with a JSON value taken from a serialized record.
    ///
    /// Numbers compare numerically, so a filter of `55` matches a stored `55.0`.
    pub fn matches_json(&self, value: &Value) -> bool {
        match (self, value) {
            (PropertyValue::String(s), Value::String(v)) => s == v,
            (PropertyValue::Boolean(b), Value::Bool(v)) => b == v,
            (PropertyValue::Integer(i), Value::Number(n)) => n.as_f64() == Some(*i as f64),
            (PropertyValue::Float(f), Value::Number(n)) => n.as_f64() == Some(f.0),
            _ => false,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl.0),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for PropertyValue { fn from(s: String) -> Self { PropertyValue::String(s) } }
impl From<&str> for PropertyValue { fn from(s: &str) -> Self { PropertyValue::String(s.to_string()) } }
impl From<i64> for PropertyValue { fn from(i: i64) -> Self { PropertyValue::Integer(i) } }
impl From<f64> for PropertyValue { fn from(f: f64) -> Self { PropertyValue::Float(SerializableFloat(f)) } }
impl From<bool> for PropertyValue { fn from(b: bool) -> Self { PropertyValue::Boolean(b) } }

/// A map of property names to their values (ordered for deterministic serialization).
pub type PropertyMap = BTreeMap<String, PropertyValue>;
