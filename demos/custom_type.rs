//! Caching a custom struct: values survive eviction through the remote
//! tier and come back typed via `typed_value`.
//!
//! ```text
//! cargo run --example custom_type -- --remote localhost:6379 --capacity 1
//! ```

use clap::Parser;
use lrcache::{CacheItem, Cli, TieredCache, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    age: u32,
}

fn describe(label: &str, item: &CacheItem) -> anyhow::Result<()> {
    if let Some(err) = item.error() {
        anyhow::bail!("lookup of {label} failed: {err}");
    }
    let origin = if item.from_remote() { "Redis" } else { "the fast tier" };
    let person: Option<Person> = item.typed_value()?;
    println!("{label} from {origin}: {person:?}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    // A capacity of 1 forces the first key out as soon as the second lands.
    cli.capacity = 1;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lrcache=info".into()),
        )
        .init();

    let cache = TieredCache::connect(&cli.to_config())?;

    let bob = Person {
        name: "Bob".into(),
        age: 21,
    };
    let alice = Person {
        name: "Alice".into(),
        age: 19,
    };

    cache.set("bob-key", Value::from_serialize(&bob)?).await;
    // Pushes bob-key out of the fast tier and into Redis.
    cache.set("alice-key", Value::from_serialize(&alice)?).await;

    describe("bob-key", &cache.get("bob-key").await)?;
    describe("alice-key", &cache.get("alice-key").await)?;

    Ok(())
}
