//! Configuration system for Brickbase
//!
//! Values are resolved with a clear supersedence chain (highest priority
//! wins):
//!
//! 1. Environment variables
//! 2. Config file (`brickbase.toml`)
//! 3. Defaults
//!
//! Secrets (search and media API keys) are never read from the config
//! file; they come exclusively from the environment.

pub mod logging;
pub mod media;
pub mod search;
pub mod server;
pub mod storage;

pub use logging::LoggingConfig;
pub use media::MediaConfig;
pub use search::SearchConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete Brickbase configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickbaseConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub search: SearchConfig,
    pub media: MediaConfig,
    pub logging: LoggingConfig,
}

impl BrickbaseConfig {
    /// Load configuration with the full supersedence chain, starting
    /// from `brickbase.toml` in the working directory.
    pub fn load() -> Result<Self> {
        Self::load_from("brickbase.toml")
    }

    /// Load configuration from a specific file, then apply environment
    /// variables on top. A missing file is not an error; defaults apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.server.merge(other.server);
        self.storage.merge(other.storage);
        self.search.merge(other.search);
        self.media.merge(other.media);
        self.logging.merge(other.logging);
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        self.server.apply_env_vars();
        self.storage.apply_env_vars();
        self.search.apply_env_vars();
        self.media.apply_env_vars();
        self.logging.apply_env_vars();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_without_file() {
        let config = BrickbaseConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.data_dir, "./data");
        assert!(config.search.api_key.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut config = BrickbaseConfig::default();
        let file: BrickbaseConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [storage]
            data_dir = "/var/lib/brickbase"
            "#,
        )
        .unwrap();
        config.merge(file);

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.data_dir, "/var/lib/brickbase");
    }
}
