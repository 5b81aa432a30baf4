//! Per-lookup result object and typed accessors.
//!
//! Every [`TieredCache::get`](crate::cache::tiered::TieredCache::get)
//! produces a fresh [`CacheItem`] carrying the raw value (if any), the tier
//! it came from, and the lookup error (if any). The typed accessors hide
//! the serialization boundary: a value that came back from the remote tier
//! is in byte form and gets decoded on demand; a fast-tier value kept its
//! native form and only needs a type check.

use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::CacheError;
use crate::value::Value;

/// The result of a single cache lookup.
///
/// If [`error`](Self::error) is set, the value is not authoritative;
/// callers should check the error first. Accessors never mutate the item,
/// so calling one twice yields the same result both times.
#[derive(Debug, Clone)]
pub struct CacheItem {
    value: Option<Value>,
    from_remote: bool,
    error: Option<CacheError>,
}

impl CacheItem {
    pub(crate) fn new(
        value: Option<Value>,
        from_remote: bool,
        error: Option<CacheError>,
    ) -> Self {
        Self {
            value,
            from_remote,
            error,
        }
    }

    /// The error from the lookup, if any.
    pub fn error(&self) -> Option<&CacheError> {
        self.error.as_ref()
    }

    /// The raw value, still in whatever form the tier held it in.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Whether the value was served by the remote tier rather than the
    /// fast tier.
    pub fn from_remote(&self) -> bool {
        self.from_remote
    }

    /// Whether the value is in the serialized byte form (the form used
    /// exclusively for values that crossed the remote-tier boundary).
    /// Callers doing custom decoding beyond the scalar accessors can use
    /// this together with [`value`](Self::value).
    pub fn is_encoded(&self) -> bool {
        matches!(self.value, Some(Value::Encoded(_)))
    }

    /// Shared resolution rule for the scalar accessors:
    /// - absent value: the type's zero value, no error
    /// - encoded bytes: decode, then extract; failure is a decode error
    /// - native value: extract; failure is a type mismatch
    fn scalar<T: Default>(
        &self,
        expected: &'static str,
        extract: impl Fn(&Value) -> Option<T>,
    ) -> Result<T, CacheError> {
        match &self.value {
            None => Ok(T::default()),
            Some(Value::Encoded(raw)) => {
                let decoded = codec::decode(raw)?;
                extract(&decoded).ok_or_else(|| {
                    CacheError::Decode(format!(
                        "bytes decoded to {}, not {expected}",
                        decoded.type_name()
                    ))
                })
            }
            Some(native) => extract(native).ok_or(CacheError::TypeMismatch {
                expected,
                found: native.type_name(),
            }),
        }
    }

    pub fn string_value(&self) -> Result<String, CacheError> {
        self.scalar("string", |v| match v {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn i32_value(&self) -> Result<i32, CacheError> {
        self.scalar("i32", |v| match v {
            Value::I32(n) => Some(*n),
            _ => None,
        })
    }

    pub fn i64_value(&self) -> Result<i64, CacheError> {
        self.scalar("i64", |v| match v {
            Value::I64(n) => Some(*n),
            _ => None,
        })
    }

    /// Integer accessor accepting either stored width, widened to `i64`.
    pub fn int_value(&self) -> Result<i64, CacheError> {
        self.scalar("integer", |v| match v {
            Value::I32(n) => Some(i64::from(*n)),
            Value::I64(n) => Some(*n),
            _ => None,
        })
    }

    pub fn f64_value(&self) -> Result<f64, CacheError> {
        self.scalar("f64", |v| match v {
            Value::F64(n) => Some(*n),
            _ => None,
        })
    }

    pub fn bool_value(&self) -> Result<bool, CacheError> {
        self.scalar("bool", |v| match v {
            Value::Bool(b) => Some(*b),
            _ => None,
        })
    }

    /// Recover a custom type stored via [`Value::from_serialize`].
    ///
    /// Returns `Ok(None)` for an absent value, mirroring the zero-value
    /// rule of the scalar accessors.
    pub fn typed_value<T: DeserializeOwned>(&self) -> Result<Option<T>, CacheError> {
        let json = match &self.value {
            None => return Ok(None),
            Some(Value::Encoded(raw)) => match codec::decode(raw)? {
                Value::Json(json) => json,
                other => {
                    return Err(CacheError::Decode(format!(
                        "bytes decoded to {}, not json",
                        other.type_name()
                    )))
                }
            },
            Some(Value::Json(json)) => json.clone(),
            Some(other) => {
                return Err(CacheError::TypeMismatch {
                    expected: "json",
                    found: other.type_name(),
                })
            }
        };

        serde_json::from_value(json)
            .map(Some)
            .map_err(|e| CacheError::Decode(e.to_string()))
    }
}
