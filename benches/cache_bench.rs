//! Benchmarks for the fast tier and the tiered hot path.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lrcache::cache::lru::LruTier;
use lrcache::{MemoryStore, TieredCache, Value};

fn bench_lru_insert_with_eviction(c: &mut Criterion) {
    c.bench_function("lru_insert_1k_capacity_256", |b| {
        b.iter(|| {
            let mut tier = LruTier::new(256);
            for i in 0..1_000i64 {
                tier.insert(i.to_string(), Value::from(i));
            }
            black_box(tier.len());
        })
    });
}

fn bench_lru_hit(c: &mut Criterion) {
    let mut tier = LruTier::new(1_000);
    for i in 0..1_000i64 {
        tier.insert(i.to_string(), Value::from(i));
    }

    c.bench_function("lru_get_hit", |b| {
        b.iter(|| {
            black_box(tier.get(black_box("500")));
        })
    });
}

fn bench_tiered_fast_hit(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let cache = TieredCache::new(1_000, Arc::new(MemoryStore::new()));
    rt.block_on(async {
        for i in 0..1_000i64 {
            cache.set(i.to_string(), i).await;
        }
    });

    c.bench_function("tiered_get_fast_hit", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(cache.get(black_box("500")).await);
        })
    });
}

criterion_group!(
    benches,
    bench_lru_insert_with_eviction,
    bench_lru_hit,
    bench_tiered_fast_hit,
);
criterion_main!(benches);
