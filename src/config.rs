//! Configuration for the local store and the command-line runner

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the sled database
    pub data_dir: PathBuf,

    /// Default `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,

    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/toll-ledger"),
            log_filter: "info".to_string(),
            store: StoreConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Page cache size in bytes
    pub cache_capacity_bytes: u64,

    /// Background flush interval; `None` flushes only on demand
    pub flush_every_ms: Option<u64>,

    /// Delete the database when the store is dropped
    pub temporary: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cache_capacity_bytes: 64 * 1024 * 1024,
            flush_every_ms: Some(500),
            temporary: false,
        }
    }
}

impl Config {
    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Defaults, overridden by `TOLL_LEDGER_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Config::default().with_env()
    }

    pub fn with_env(mut self) -> anyhow::Result<Self> {
        if let Ok(data_dir) = std::env::var("TOLL_LEDGER_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(filter) = std::env::var("TOLL_LEDGER_LOG") {
            self.log_filter = filter;
        }

        if let Ok(ms) = std::env::var("TOLL_LEDGER_FLUSH_MS") {
            self.store.flush_every_ms = Some(ms.parse()?);
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.store.flush_every_ms, Some(500));
        assert!(!config.store.temporary);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            data_dir = "/var/lib/toll-ledger"

            [store]
            temporary = true
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/toll-ledger"));
        assert!(config.store.temporary);
        assert_eq!(config.store.cache_capacity_bytes, 64 * 1024 * 1024);
        assert_eq!(config.log_filter, "info");
    }
}
