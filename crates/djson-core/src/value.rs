//! The dynamic JSON value model.
//!
//! `Value` is a closed tagged union over the six JSON kinds. Numbers are always
//! `f64`; integers and floats are not distinguished once decoded.
//!
//! # Typed access
//!
//! Two tiers are provided on purpose:
//!
//! - **Sentinel accessors** (`as_str`, `as_f64`, `as_bool`, `as_array`,
//!   `as_object`) never fail. On a kind mismatch they return the zero value of
//!   the requested type: `""`, `0.0`, `false`, an empty slice, an empty map.
//! - **Strict accessors** (`try_str`, `try_f64`, ...) return `None` on a kind
//!   mismatch. Use these, or match on [`Value::kind`], when a zero value would
//!   be indistinguishable from real data.

use crate::codec::{encode_with, EncodeStyle};
use crate::map::Map;
use std::fmt;

static EMPTY_MAP: Map = Map::new();

/// The kind (variant tag) of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lowercase name as used in messages and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Arrays and objects are containers; everything else is a leaf.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Array | Kind::Object)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One JSON datum.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Members in insertion order.
    Object(Map),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    // ------------------------------------------------------------------------
    // Sentinel accessors
    // ------------------------------------------------------------------------

    /// The string payload, or `""` if this is not a string.
    pub fn as_str(&self) -> &str {
        self.try_str().unwrap_or("")
    }

    /// The number payload, or `0.0` if this is not a number.
    pub fn as_f64(&self) -> f64 {
        self.try_f64().unwrap_or(0.0)
    }

    /// The bool payload, or `false` if this is not a bool.
    pub fn as_bool(&self) -> bool {
        self.try_bool().unwrap_or(false)
    }

    /// The array elements, or an empty slice if this is not an array.
    pub fn as_array(&self) -> &[Value] {
        self.try_array().unwrap_or(&[])
    }

    /// The object members, or an empty map if this is not an object.
    pub fn as_object(&self) -> &Map {
        self.try_object().unwrap_or(&EMPTY_MAP)
    }

    // ------------------------------------------------------------------------
    // Strict accessors
    // ------------------------------------------------------------------------

    pub fn try_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn try_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn try_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn try_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn try_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Number of children: array length, object member count, `0` for leaves.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compact JSON text; `{:#}` gives pretty-printed JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            EncodeStyle::Pretty
        } else {
            EncodeStyle::Compact
        };
        let bytes = encode_with(self, style);
        f.write_str(std::str::from_utf8(&bytes).map_err(|_| fmt::Error)?)
    }
}

// ============================================================================
// Construction
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

/// Values beyond ±2^53 lose precision.
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}
