//! Remote tier backends.
//!
//! The remote tier is an unbounded key→bytes store with no eviction. The
//! cache talks to it through the [`RemoteStore`] trait, which reduces every
//! backend to a get/set/delete trichotomy:
//! - `get` distinguishes absent (`Ok(None)`) from failure
//! - `set` has unconditional overwrite semantics
//! - `delete` of an absent key is an error, not a no-op
//!
//! Backends:
//! - [`redis::RedisStore`]: Redis over a bounded connection pool
//! - [`memory::MemoryStore`]: process-local map for tests and demos

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::CacheError;

pub mod memory;
pub mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

/// The remote (slow) tier: a logically unbounded key→bytes store.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the bytes stored under `key`. `Ok(None)` means the key does
    /// not exist remotely; that is not an error.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, CacheError>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: Bytes) -> Result<(), CacheError>;

    /// Remove `key`. Deleting a key that does not exist fails with
    /// [`CacheError::Protocol`]; callers needing idempotent delete must
    /// tolerate that error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

/// Shared handle to a remote store.
pub type RemoteHandle = Arc<dyn RemoteStore>;
