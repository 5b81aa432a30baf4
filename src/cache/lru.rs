//! Bounded fast-tier container with strict LRU eviction.
//!
//! `LruTier` is a plain data structure with no interior locking; the
//! [`TieredCache`](crate::cache::tiered::TieredCache) serializes access to
//! it. Inserting into a full tier evicts exactly one entry, the least
//! recently used, and hands the evicted pair back to the caller so the
//! write-back can happen outside the critical section.

use std::collections::HashMap;

use crate::value::Value;

struct Entry {
    value: Value,
    /// Monotonic recency stamp; the entry with the smallest stamp is the
    /// eviction victim.
    last_used: u64,
}

/// Capacity-bounded associative container with least-recently-used
/// eviction.
pub struct LruTier {
    entries: HashMap<String, Entry>,
    capacity: usize,
    tick: u64,
}

impl LruTier {
    /// Create a tier holding at most `capacity` entries. A capacity of
    /// zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            tick: 0,
        }
    }

    /// Insert or update `key`.
    ///
    /// Updating a resident key never evicts. Inserting a new key into a
    /// full tier removes the least recently used entry first and returns
    /// it; the new key is resident either way.
    pub fn insert(&mut self, key: String, value: Value) -> Option<(String, Value)> {
        self.tick += 1;

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.last_used = self.tick;
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.pop_lru()
        } else {
            None
        };

        self.entries.insert(
            key,
            Entry {
                value,
                last_used: self.tick,
            },
        );
        evicted
    }

    /// Look up `key`, marking it most recently used on a hit.
    pub fn get(&mut self, key: &str) -> Option<&Value> {
        self.tick += 1;
        let tick = self.tick;
        let entry = self.entries.get_mut(key)?;
        entry.last_used = tick;
        Some(&entry.value)
    }

    /// Look up `key` without touching recency.
    pub fn peek(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|e| &e.value)
    }

    /// Remove `key`, returning its value if it was resident.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key).map(|e| e.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove and return the least recently used entry.
    fn pop_lru(&mut self) -> Option<(String, Value)> {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.last_used)
            .map(|(k, _)| k.clone())?;
        let entry = self.entries.remove(&victim)?;
        Some((victim, entry.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eviction_order_is_insertion_order() {
        let mut tier = LruTier::new(3);

        for i in 0..5i32 {
            tier.insert(i.to_string(), Value::from(i));
        }

        // "0" and "1" evicted, "2".."4" resident.
        assert!(!tier.contains("0"));
        assert!(!tier.contains("1"));
        assert!(tier.contains("2"));
        assert!(tier.contains("4"));
        assert_eq!(tier.len(), 3);
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut tier = LruTier::new(2);
        tier.insert("a".into(), Value::from(1i32));
        tier.insert("b".into(), Value::from(2i32));

        // Touch "a"; the next insert must evict "b" instead.
        assert!(tier.get("a").is_some());
        let evicted = tier.insert("c".into(), Value::from(3i32)).unwrap();
        assert_eq!(evicted.0, "b");
        assert!(tier.contains("a"));
    }

    #[test]
    fn test_update_in_place_does_not_evict() {
        let mut tier = LruTier::new(2);
        tier.insert("a".into(), Value::from(1i32));
        tier.insert("b".into(), Value::from(2i32));

        assert!(tier.insert("a".into(), Value::from(10i32)).is_none());
        assert_eq!(tier.len(), 2);
        assert_eq!(tier.peek("a"), Some(&Value::I32(10)));
    }

    #[test]
    fn test_evicted_pair_carries_value() {
        let mut tier = LruTier::new(1);
        tier.insert("old".into(), Value::from("cold"));
        let (key, value) = tier.insert("new".into(), Value::from("hot")).unwrap();
        assert_eq!(key, "old");
        assert_eq!(value, Value::Str("cold".into()));
    }

    #[test]
    fn test_zero_capacity_clamped_to_one() {
        let mut tier = LruTier::new(0);
        assert_eq!(tier.capacity(), 1);
        assert!(tier.insert("a".into(), Value::from(1i32)).is_none());
        assert!(tier.insert("b".into(), Value::from(2i32)).is_some());
    }
}
