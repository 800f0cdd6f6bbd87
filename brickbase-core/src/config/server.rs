//! HTTP surface configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port
    /// Env: BB_PORT
    /// Default: 8080
    pub port: u16,

    /// Listening address
    /// Env: BB_HOST
    /// Default: "127.0.0.1"
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080, host: "127.0.0.1".to_string() }
    }
}

impl ServerConfig {
    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        if let Ok(port) = env::var("BB_PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        if let Ok(host) = env::var("BB_HOST") {
            self.host = host;
        }
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
