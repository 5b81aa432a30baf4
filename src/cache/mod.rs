//! The two-tier cache core.
//!
//! - [`lru`]: bounded fast-tier container with strict LRU eviction
//! - [`item`]: per-lookup result object with typed accessors
//! - [`tiered`]: the cache itself, wiring the fast tier to the remote store

pub mod item;
pub mod lru;
pub mod tiered;
