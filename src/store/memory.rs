//! In-process remote-store backend.
//!
//! A `HashMap` behind the [`RemoteStore`] trait. Useful for tests and for
//! running the demos without a Redis deployment. Implements the same
//! contract as the Redis backend, including the delete-of-absent error.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::error::CacheError;
use crate::store::RemoteStore;

/// Process-local key→bytes store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, CacheError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Bytes) -> Result<(), CacheError> {
        self.entries.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        match self.entries.write().await.remove(key) {
            Some(_) => Ok(()),
            None => Err(CacheError::Protocol(format!(
                "delete removed no keys: {key}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let store = MemoryStore::new();

        store.set("a", Bytes::from_static(b"1")).await.unwrap();
        assert_eq!(
            store.get("a").await.unwrap(),
            Some(Bytes::from_static(b"1"))
        );

        store.delete("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_is_protocol_error() {
        let store = MemoryStore::new();
        let err = store.delete("missing").await.unwrap_err();
        assert!(matches!(err, CacheError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_overwrite_semantics() {
        let store = MemoryStore::new();
        store.set("k", Bytes::from_static(b"old")).await.unwrap();
        store.set("k", Bytes::from_static(b"new")).await.unwrap();
        assert_eq!(
            store.get("k").await.unwrap(),
            Some(Bytes::from_static(b"new"))
        );
        assert_eq!(store.len().await, 1);
    }
}
