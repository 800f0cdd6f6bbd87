//! Logging configuration

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter: "error", "warn", "info", "debug" or "trace"
    /// Env: BB_LOG_LEVEL (RUST_LOG still wins if set)
    /// Default: "info"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl LoggingConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(level) = env::var("BB_LOG_LEVEL") {
            self.level = level;
        }
    }
}
