//! External search index configuration
//!
//! The API key is a secret and is only accepted from the environment,
//! never from the config file.

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL of the hosted search index
    /// Env: BB_SEARCH_ENDPOINT
    /// Default: "http://127.0.0.1:7700"
    pub endpoint: String,

    /// Index name holding the property mirror
    /// Env: BB_SEARCH_INDEX
    /// Default: "properties"
    pub index: String,

    /// Admin API key
    /// Env: BB_SEARCH_API_KEY (environment only)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:7700".to_string(),
            index: "properties".to_string(),
            api_key: None,
        }
    }
}

impl SearchConfig {
    pub fn merge(&mut self, other: Self) {
        self.endpoint = other.endpoint;
        self.index = other.index;
        // api_key intentionally not merged from files
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(endpoint) = env::var("BB_SEARCH_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(index) = env::var("BB_SEARCH_INDEX") {
            self.index = index;
        }
        if let Ok(key) = env::var("BB_SEARCH_API_KEY") {
            self.api_key = Some(key);
        }
    }
}
