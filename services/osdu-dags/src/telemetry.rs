//! Logging setup for the task runner.
//!
//! `RUST_LOG` wins over the configured level. Output goes to stderr so that
//! stdout carries nothing but the task result.

use osdu_core::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the level filter: `RUST_LOG` if set, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global subscriber in the configured format.
pub fn init_logging(config: &LoggingConfig) {
    let builder = fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
