//! Runtime configuration.
//!
//! All knobs live in an explicit [`Config`] passed to the cache
//! constructor; there is no process-wide mutable state. The demo programs
//! build a `Config` from command-line flags via [`Cli`].

use std::path::Path;

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Command-line arguments for the demo programs.
#[derive(Parser, Debug, Clone)]
#[command(name = "lrcache", about = "Two-tier LRU + Redis cache demo")]
pub struct Cli {
    /// Redis host and port, e.g. localhost:6379.
    #[arg(long, default_value = "localhost:6379")]
    pub remote: String,

    /// Redis connection pool size.
    #[arg(long, default_value_t = 5)]
    pub pool_size: usize,

    /// Prefix attached to every key sent to Redis.
    #[arg(long, default_value = "lr_")]
    pub key_prefix: String,

    /// Fast-tier (LRU) capacity.
    #[arg(long, default_value_t = 5)]
    pub capacity: usize,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Fold the flags into a [`Config`].
    pub fn to_config(&self) -> Config {
        Config {
            remote_addr: self.remote.clone(),
            pool_size: self.pool_size,
            key_prefix: self.key_prefix.clone(),
            capacity: self.capacity,
        }
    }
}

/// Cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host/port (or redis:// URL) of the remote store.
    pub remote_addr: String,

    /// Maximum concurrent remote connections. Must be at least 1.
    pub pool_size: usize,

    /// Namespace prepended to every key sent remotely.
    pub key_prefix: String,

    /// Maximum resident entries in the fast tier. Must be at least 1.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_addr: "127.0.0.1:6379".to_string(),
            pool_size: 5,
            key_prefix: "lr_".to_string(),
            capacity: 128,
        }
    }
}

/// Configuration validation failures.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("pool_size must be at least 1")]
    InvalidPoolSize,

    #[error("capacity must be at least 1")]
    InvalidCapacity,

    #[error("remote_addr must not be empty")]
    EmptyRemoteAddr,
}

impl Config {
    /// Check the ≥1 constraints before constructing a cache.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size < 1 {
            return Err(ConfigError::InvalidPoolSize);
        }
        if self.capacity < 1 {
            return Err(ConfigError::InvalidCapacity);
        }
        if self.remote_addr.is_empty() {
            return Err(ConfigError::EmptyRemoteAddr);
        }
        Ok(())
    }

    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&data)?;
            Ok(config)
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.pool_size, 5);
        assert_eq!(cfg.key_prefix, "lr_");
    }

    #[test]
    fn test_validation_rejects_zero_knobs() {
        let mut cfg = Config::default();
        cfg.capacity = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidCapacity));

        let mut cfg = Config::default();
        cfg.pool_size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidPoolSize));

        let mut cfg = Config::default();
        cfg.remote_addr.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyRemoteAddr));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let cfg = Config::load(Path::new("/nonexistent/lrcache.json")).unwrap();
        assert_eq!(cfg.capacity, Config::default().capacity);
    }
}
