//! Logging initialization built on the standard `log` crate
//!
//! Brickbase logs through the standard `log` macros everywhere; this
//! module wires them to `env_logger` once at startup, driven by the
//! `[logging]` config section. `RUST_LOG` overrides the configured
//! level when set.

use std::sync::Once;

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Initialize the logger. Safe to call multiple times; only the first
/// call has any effect.
pub fn init_logging(config: &LoggingConfig) {
    let level = config.level.clone();
    INIT.call_once(move || {
        let env = env_logger::Env::default().default_filter_or(level);
        let _ = env_logger::Builder::from_env(env).format_timestamp_millis().try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig::default();
        init_logging(&config);
        init_logging(&config);
        log::debug!("logger initialized twice without panicking");
    }
}
