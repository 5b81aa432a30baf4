//! The tiered cache: bounded fast tier backed by a remote store.
//!
//! Control flow:
//! - `set` inserts into the fast tier; if that evicts the least recently
//!   used entry, the evicted pair is encoded and pushed to the remote store
//!   before `set` returns. Write-back failures are logged, counted, and
//!   swallowed: the entry is gone from the fast tier regardless.
//! - `get` checks the fast tier first (marking the entry most recently
//!   used), then falls back to the remote store. A remote hit is not
//!   promoted back into the fast tier; only `set` populates it.
//! - `delete` removes from both tiers and always reports success; the
//!   remote half is best-effort.
//!
//! The fast tier sits behind a single mutex, so recency updates and victim
//! selection are one atomic critical section per call. The evicted pair is
//! copied out before the remote write, so concurrent fast-tier operations
//! never wait on the network.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::item::CacheItem;
use crate::cache::lru::LruTier;
use crate::codec;
use crate::config::Config;
use crate::error::CacheError;
use crate::store::{RedisStore, RemoteHandle};
use crate::value::Value;

/// Operation counters, snapshot via [`TieredCache::stats`].
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Lookups answered by the fast tier.
    pub fast_hits: u64,
    /// Lookups answered by the remote tier.
    pub remote_hits: u64,
    /// Lookups absent from both tiers.
    pub misses: u64,
    /// Entries evicted from the fast tier.
    pub evictions: u64,
    /// Evictions whose remote write-back failed (the entries were dropped).
    pub write_back_errors: u64,
}

/// Callback observing write-back failures on the fire-and-forget path.
pub type WriteBackObserver = Box<dyn Fn(&str, &CacheError) + Send + Sync>;

struct FastTier {
    lru: LruTier,
    stats: CacheStats,
}

/// Two-tier read-through/write-back cache.
pub struct TieredCache {
    fast: Mutex<FastTier>,
    store: RemoteHandle,
    write_back_observer: Option<WriteBackObserver>,
}

impl TieredCache {
    /// Build a cache over an injected remote store.
    pub fn new(capacity: usize, store: RemoteHandle) -> Self {
        Self {
            fast: Mutex::new(FastTier {
                lru: LruTier::new(capacity),
                stats: CacheStats::default(),
            }),
            store,
            write_back_observer: None,
        }
    }

    /// Build a cache backed by Redis, per the given configuration.
    pub fn connect(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        let store = RedisStore::from_config(config)?;
        Ok(Self::new(config.capacity, Arc::new(store)))
    }

    /// Register a callback invoked whenever an eviction write-back fails.
    /// The return contract of [`set`](Self::set) is unchanged; this is
    /// observation only.
    pub fn with_write_back_observer(
        mut self,
        observer: impl Fn(&str, &CacheError) + Send + Sync + 'static,
    ) -> Self {
        self.write_back_observer = Some(Box::new(observer));
        self
    }

    /// Insert or update `key` in the fast tier.
    ///
    /// Returns true iff the insertion evicted a different key. The evicted
    /// entry is written to the remote store synchronously within this call;
    /// if that write fails the entry is dropped and `set` still reports
    /// the eviction.
    pub async fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let key = key.into();
        let evicted = {
            let mut fast = self.fast.lock().await;
            let evicted = fast.lru.insert(key, value.into());
            if evicted.is_some() {
                fast.stats.evictions += 1;
            }
            evicted
        };

        let Some((evicted_key, evicted_value)) = evicted else {
            return false;
        };

        debug!(key = %evicted_key, "fast tier full, writing back evicted entry");
        let result = match codec::encode(&evicted_value) {
            Ok(raw) => self.store.set(&evicted_key, raw).await,
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            self.note_write_back_failure(&evicted_key, &err).await;
        }

        true
    }

    /// Look up `key`: fast tier first, remote store on a miss.
    ///
    /// The returned item carries the origin tier and, for the remote
    /// fallback path, any transport or protocol error. A key absent from
    /// both tiers yields an item with no value and no error.
    pub async fn get(&self, key: &str) -> CacheItem {
        {
            let mut fast = self.fast.lock().await;
            if let Some(value) = fast.lru.get(key).cloned() {
                fast.stats.fast_hits += 1;
                debug!(key, "fast tier hit");
                return CacheItem::new(Some(value), false, None);
            }
        }

        match self.store.get(key).await {
            Ok(Some(raw)) => {
                debug!(key, bytes = raw.len(), "remote tier hit");
                self.fast.lock().await.stats.remote_hits += 1;
                CacheItem::new(Some(Value::Encoded(raw)), true, None)
            }
            Ok(None) => {
                debug!(key, "absent from both tiers");
                self.fast.lock().await.stats.misses += 1;
                CacheItem::new(None, true, None)
            }
            Err(err) => {
                debug!(key, error = %err, "remote lookup failed");
                CacheItem::new(None, false, Some(err))
            }
        }
    }

    /// Remove `key` from both tiers. Always succeeds from the caller's
    /// point of view; a failing remote delete (including deleting a key
    /// that never reached the remote tier) is logged and swallowed.
    pub async fn delete(&self, key: &str) {
        self.fast.lock().await.lru.remove(key);

        if let Err(err) = self.store.delete(key).await {
            debug!(key, error = %err, "remote delete failed, deletion is best-effort");
        }
    }

    /// Number of entries resident in the fast tier.
    pub async fn resident(&self) -> usize {
        self.fast.lock().await.lru.len()
    }

    /// Fast-tier capacity.
    pub async fn capacity(&self) -> usize {
        self.fast.lock().await.lru.capacity()
    }

    /// Snapshot of the operation counters.
    pub async fn stats(&self) -> CacheStats {
        self.fast.lock().await.stats.clone()
    }

    async fn note_write_back_failure(&self, key: &str, err: &CacheError) {
        warn!(key, error = %err, "write-back failed, evicted entry dropped");
        self.fast.lock().await.stats.write_back_errors += 1;
        if let Some(observer) = &self.write_back_observer {
            observer(key, err);
        }
    }
}
