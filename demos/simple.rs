//! Overflow walkthrough: insert ten keys into a five-entry fast tier and
//! watch the five coldest spill into Redis.
//!
//! Run with a Redis server on localhost:
//! ```text
//! cargo run --example simple -- --remote localhost:6379
//! ```

use clap::Parser;
use lrcache::{Cli, TieredCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "lrcache=debug" } else { "lrcache=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    let cache = TieredCache::connect(&cli.to_config())?;

    // With a capacity of 5 (the default), the first five keys are evicted
    // into Redis as the last five arrive.
    for i in 0..10i32 {
        let evicted = cache.set(i.to_string(), i).await;
        println!("set key {i} with value {i}. evicted something? {evicted}");
    }

    for i in 0..10i32 {
        let item = cache.get(&i.to_string()).await;
        match item.i32_value() {
            Ok(val) if item.from_remote() => println!("value came from Redis: {val}"),
            Ok(val) => println!("value came from the fast tier: {val}"),
            Err(err) => println!("lookup failed: {err}"),
        }
    }

    Ok(())
}
