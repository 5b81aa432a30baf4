//! Live-Redis integration tests.
//!
//! These need a Redis server on localhost:6379 (or $LRCACHE_TEST_REDIS)
//! and are ignored by default:
//! ```text
//! cargo test --test redis_store -- --ignored
//! ```

use std::sync::Arc;

use bytes::Bytes;
use lrcache::{CacheError, RedisStore, RemoteStore, TieredCache};

fn addr() -> String {
    std::env::var("LRCACHE_TEST_REDIS").unwrap_or_else(|_| "localhost:6379".to_string())
}

fn store(prefix: &str) -> RedisStore {
    RedisStore::new(&addr(), 5, prefix).unwrap()
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn test_set_get_delete_round_trip() {
    let store = store("lrcache_test_rt_");

    store.set("k", Bytes::from_static(b"hello")).await.unwrap();
    assert_eq!(
        store.get("k").await.unwrap(),
        Some(Bytes::from_static(b"hello"))
    );

    store.delete("k").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn test_delete_absent_key_is_protocol_error() {
    let store = store("lrcache_test_del_");
    let err = store.delete("never-existed").await.unwrap_err();
    assert!(matches!(err, CacheError::Protocol(_)));
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn test_prefixes_isolate_keyspaces() {
    let a = store("lrcache_test_a_");
    let b = store("lrcache_test_b_");

    a.set("shared", Bytes::from_static(b"from a")).await.unwrap();
    assert_eq!(b.get("shared").await.unwrap(), None);

    a.delete("shared").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn test_tiered_overflow_against_live_redis() {
    let cache = TieredCache::new(5, Arc::new(store("lrcache_test_tier_")));

    for i in 0..10i32 {
        cache.set(format!("k{i}"), i).await;
    }

    for i in 0..5i32 {
        let item = cache.get(&format!("k{i}")).await;
        assert!(item.from_remote(), "k{i} expected from redis");
        assert_eq!(item.i32_value().unwrap(), i);
    }
    for i in 5..10i32 {
        let item = cache.get(&format!("k{i}")).await;
        assert!(!item.from_remote(), "k{i} expected from the fast tier");
        assert_eq!(item.i32_value().unwrap(), i);
    }

    for i in 0..10i32 {
        cache.delete(&format!("k{i}")).await;
    }
}

#[tokio::test]
async fn test_unreachable_host_reports_transport_error() {
    // Nothing listens here; connection setup happens lazily on first use.
    let store = RedisStore::new("127.0.0.1:1", 1, "lrcache_test_down_").unwrap();
    let err = store.get("k").await.unwrap_err();
    assert!(matches!(err, CacheError::Transport(_)));
}
