//! External media host configuration
//!
//! The upload endpoint and preset identify the account on the hosting
//! provider; the preset authorizes unsigned uploads, so it is treated
//! as a secret and only accepted from the environment.

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Multipart upload endpoint of the media host
    /// Env: BB_MEDIA_ENDPOINT
    pub endpoint: String,

    /// Upload preset identifier
    /// Env: BB_MEDIA_UPLOAD_PRESET (environment only)
    #[serde(skip)]
    pub upload_preset: Option<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self { endpoint: String::new(), upload_preset: None }
    }
}

impl MediaConfig {
    pub fn merge(&mut self, other: Self) {
        self.endpoint = other.endpoint;
        // upload_preset intentionally not merged from files
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(endpoint) = env::var("BB_MEDIA_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(preset) = env::var("BB_MEDIA_UPLOAD_PRESET") {
            self.upload_preset = Some(preset);
        }
    }
}
