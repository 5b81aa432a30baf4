//! Byte codec for the remote-tier boundary.
//!
//! Values cross into the remote tier as a compact, self-describing binary
//! form: the serde encoding of the [`Value`] enum itself. The variant tag
//! travels with the payload, so the decoder can recover the native type
//! without out-of-band schema information.

use bytes::Bytes;

use crate::error::CacheError;
use crate::value::Value;

/// Serialize a value for the remote tier.
///
/// An already-[`Value::Encoded`] value passes through unchanged, so an
/// entry fetched from the remote tier and later re-evicted is never
/// double-wrapped.
pub fn encode(value: &Value) -> Result<Bytes, CacheError> {
    if let Value::Encoded(raw) = value {
        return Ok(raw.clone());
    }
    bincode::serialize(value)
        .map(Bytes::from)
        .map_err(|e| CacheError::Encode(e.to_string()))
}

/// Reconstruct a value from remote-tier bytes.
pub fn decode(raw: &[u8]) -> Result<Value, CacheError> {
    bincode::deserialize(raw).map_err(|e| CacheError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // decode(encode(v)) == v for every supported scalar form.
    #[test]
    fn test_round_trip_scalars() {
        let values = vec![
            Value::from("hello"),
            Value::from(-3i32),
            Value::from(1_000_000_000_000i64),
            Value::from(3.25f64),
            Value::from(true),
            Value::Json(serde_json::json!({"name": "bob", "age": 21})),
        ];

        for v in values {
            let bytes = encode(&v).unwrap();
            assert_eq!(decode(&bytes).unwrap(), v);
        }
    }

    #[test]
    fn test_encoded_passthrough() {
        let bytes = encode(&Value::from(42i32)).unwrap();
        let wrapped = Value::Encoded(bytes.clone());
        assert_eq!(encode(&wrapped).unwrap(), bytes);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode(&[0xff; 3]).unwrap_err();
        assert!(matches!(err, CacheError::Decode(_)));
    }
}
