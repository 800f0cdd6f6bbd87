//! Document store configuration

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON-lines file per collection
    /// Env: BB_DATA_DIR
    /// Default: "./data"
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: "./data".to_string() }
    }
}

impl StorageConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(dir) = env::var("BB_DATA_DIR") {
            self.data_dir = dir;
        }
    }
}
