//! Redis remote-store backend.
//!
//! Adapts the [`RemoteStore`] contract onto Redis GET/SET/DEL:
//! - Keys are namespaced with a configured prefix before they leave the
//!   process, so a shared Redis instance can host unrelated keyspaces.
//! - Each operation checks a connection out of a bounded pool and returns
//!   it on every exit path (the pool object is an RAII guard). When the
//!   pool is exhausted, acquisition waits until a connection frees up.
//! - A nil GET reply maps to `Ok(None)`; a non-`OK` SET reply and a DEL
//!   that removed no keys map to [`CacheError::Protocol`].

use async_trait::async_trait;
use bytes::Bytes;
use deadpool_redis::redis::{cmd, RedisError};
use deadpool_redis::{Connection, Pool, PoolConfig, Runtime};
use tracing::debug;

use crate::config::Config;
use crate::error::CacheError;
use crate::store::RemoteStore;

/// Remote store adapter over a pooled Redis client.
pub struct RedisStore {
    pool: Pool,
    prefix: String,
}

impl RedisStore {
    /// Build a store talking to `addr` (host:port or a full `redis://` URL)
    /// through a pool of at most `pool_size` connections. `prefix` is
    /// prepended to every key sent to the server.
    ///
    /// Connections are established lazily; a bad address surfaces as a
    /// [`CacheError::Transport`] on first use, not here.
    pub fn new(
        addr: &str,
        pool_size: usize,
        prefix: impl Into<String>,
    ) -> Result<Self, CacheError> {
        let url = if addr.contains("://") {
            addr.to_owned()
        } else {
            format!("redis://{addr}")
        };

        let mut cfg = deadpool_redis::Config::from_url(url);
        cfg.pool = Some(PoolConfig::new(pool_size.max(1)));
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::Transport(e.to_string()))?;

        Ok(Self {
            pool,
            prefix: prefix.into(),
        })
    }

    /// Build a store from a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, CacheError> {
        Self::new(&config.remote_addr, config.pool_size, &config.key_prefix)
    }

    /// The key as it appears on the server.
    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    async fn connection(&self) -> Result<Connection, CacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError::Transport(e.to_string()))
    }
}

/// Connectivity failures are transport errors; anything the server answered
/// with is a protocol error.
fn map_redis_err(err: RedisError) -> CacheError {
    if err.is_io_error() || err.is_timeout() || err.is_connection_refusal() {
        CacheError::Transport(err.to_string())
    } else {
        CacheError::Protocol(err.to_string())
    }
}

#[async_trait]
impl RemoteStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, CacheError> {
        let mut conn = self.connection().await?;
        let data: Option<Vec<u8>> = cmd("GET")
            .arg(self.namespaced(key))
            .query_async(&mut conn)
            .await
            .map_err(map_redis_err)?;
        Ok(data.map(Bytes::from))
    }

    async fn set(&self, key: &str, value: Bytes) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        let reply: String = cmd("SET")
            .arg(self.namespaced(key))
            .arg(&value[..])
            .query_async(&mut conn)
            .await
            .map_err(map_redis_err)?;

        if reply != "OK" {
            return Err(CacheError::Protocol(format!("SET returned {reply}")));
        }

        debug!(key, bytes = value.len(), "stored value in remote tier");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        let removed: u64 = cmd("DEL")
            .arg(self.namespaced(key))
            .query_async(&mut conn)
            .await
            .map_err(map_redis_err)?;

        if removed == 0 {
            return Err(CacheError::Protocol(format!(
                "DEL removed no keys: {key}"
            )));
        }
        Ok(())
    }
}
