//! Cache value representation.
//!
//! A [`Value`] is the payload stored in the fast tier. Values keep their
//! native form while resident in memory; only when an entry is evicted to
//! the remote tier is it serialized to bytes. A value fetched back from the
//! remote tier carries the [`Value::Encoded`] form until a typed accessor
//! decodes it.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// A cached payload: either a native typed value or the opaque byte form
/// produced at the remote-tier boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A UTF-8 string.
    Str(String),
    /// A 32-bit signed integer.
    I32(i32),
    /// A 64-bit signed integer.
    I64(i64),
    /// A 64-bit float.
    F64(f64),
    /// A boolean.
    Bool(bool),
    /// An arbitrary structured payload (custom types go through serde_json).
    /// Travels as JSON text across the byte codec: bincode cannot drive
    /// `serde_json::Value`'s `deserialize_any`.
    Json(#[serde(with = "json_text")] serde_json::Value),
    /// An opaque byte sequence. This form is used exclusively for values
    /// that crossed the remote-tier boundary.
    Encoded(Bytes),
}

mod json_text {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &serde_json::Value,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<serde_json::Value, D::Error> {
        let text = String::deserialize(deserializer)?;
        serde_json::from_str(&text).map_err(serde::de::Error::custom)
    }
}

impl Value {
    /// Whether this value is in the serialized byte form, i.e. it came back
    /// from the remote tier and has not been decoded yet.
    pub fn is_encoded(&self) -> bool {
        matches!(self, Value::Encoded(_))
    }

    /// Wrap raw bytes fetched from the remote tier.
    pub fn encoded(raw: impl Into<Bytes>) -> Self {
        Value::Encoded(raw.into())
    }

    /// Build a [`Value::Json`] from any serializable type.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, CacheError> {
        serde_json::to_value(value)
            .map(Value::Json)
            .map_err(|e| CacheError::Encode(e.to_string()))
    }

    /// Human-readable name of the stored form, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::F64(_) => "f64",
            Value::Bool(_) => "bool",
            Value::Json(_) => "json",
            Value::Encoded(_) => "encoded bytes",
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}
