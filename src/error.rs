//! Error taxonomy for cache operations.

use thiserror::Error;

/// Errors surfaced by cache and remote-store operations.
///
/// Payloads are plain strings so the enum stays `Clone`: a
/// [`CacheItem`](crate::cache::item::CacheItem) holds the error from its
/// lookup and hands a copy back from every accessor call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CacheError {
    /// Network or connection failure talking to the remote tier.
    #[error("remote transport error: {0}")]
    Transport(String),

    /// The remote tier responded, but with an unexpected or failure status
    /// (e.g. a DEL that removed no keys).
    #[error("remote protocol error: {0}")]
    Protocol(String),

    /// A native value could not be serialized for the remote tier.
    #[error("encode error: {0}")]
    Encode(String),

    /// Stored bytes could not be reconstructed as the requested type.
    #[error("decode error: {0}")]
    Decode(String),

    /// A fast-tier value's native type does not match the requested
    /// accessor's type. A caller error, not a system fault.
    #[error("type mismatch: requested {expected}, value is {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
