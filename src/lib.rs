//! lrcache: two-tier read-through/write-back cache.
//!
//! A bounded, in-memory LRU fast tier backed by an unbounded remote store
//! (Redis). Inserting past capacity evicts the least recently used entry
//! and writes it back to the remote tier; lookups fall back to the remote
//! tier on a fast-tier miss. Values keep their native form in memory and
//! are serialized only at the remote boundary; typed accessors on the
//! lookup result decode bytes back into native types on demand.
//!
//! ```no_run
//! use lrcache::{Config, TieredCache};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let cache = TieredCache::connect(&Config::default())?;
//!
//! cache.set("answer", 42i32).await;
//! let item = cache.get("answer").await;
//! assert_eq!(item.i32_value()?, 42);
//! assert!(!item.from_remote());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod store;
pub mod value;

pub use cache::item::CacheItem;
pub use cache::tiered::{CacheStats, TieredCache};
pub use config::{Cli, Config, ConfigError};
pub use error::CacheError;
pub use store::{MemoryStore, RedisStore, RemoteHandle, RemoteStore};
pub use value::Value;
