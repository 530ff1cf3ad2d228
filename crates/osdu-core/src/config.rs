//! Configuration management for OSDU workflow tasks
//!
//! Sources, lowest priority first:
//! - Hardcoded defaults
//! - ./config/osdu-dags.{yaml,toml,json}
//! - File named by the OSDU_DAGS_CONFIG env var
//! - Environment variables (`OSDU_DAGS_STORAGE__URL=...`)

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "OSDU_DAGS_CONFIG";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "OSDU_DAGS";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DagsConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DagsConfig {
    /// Load configuration from defaults, files and the environment, then validate it.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(
            std::env::var(CONFIG_PATH_ENV).ok().as_deref(),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Same layering as [`DagsConfig::load`] with an explicit config file path
    /// and environment source.
    pub fn load_with(config_path: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Self::set_defaults(Config::builder())?;

        builder = builder.add_source(File::with_name("./config/osdu-dags").required(false));

        if let Some(config_path) = config_path {
            builder = builder.add_source(File::with_name(config_path).required(true));
        }

        // Example: OSDU_DAGS_STORAGE__TIMEOUT_SECS=30
        builder = builder.add_source(
            env.prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: DagsConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn set_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("storage.url", default_storage_url())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.storage.url.trim();
        if url.is_empty() {
            return Err(ConfigError::Message("storage.url cannot be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "storage.url must be an http(s) URL, got '{}'",
                self.storage.url
            )));
        }

        if self.storage.timeout_secs == Some(0) {
            return Err(ConfigError::Message(
                "storage.timeout_secs must be > 0 when set".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::Message(format!(
                "Invalid logging.format '{}', must be 'pretty' or 'json'",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Load configuration from a specific file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: DagsConfig = Self::set_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Commented YAML template with every option at its default.
    #[must_use]
    pub fn template() -> String {
        format!(
            r#"# OSDU workflow task configuration
# Every key can be overridden with OSDU_DAGS_<SECTION>__<KEY>.

storage:
  # Base URL of the storage service; records are sent to <url>/records
  url: {}
  # Request timeout in seconds (omit to use the HTTP client default)
  # timeout_secs: 30

logging:
  # trace, debug, info, warn, error (RUST_LOG takes precedence)
  level: {}
  # pretty or json
  format: {}
"#,
            default_storage_url(),
            default_log_level(),
            default_log_format()
        )
    }
}

/// Storage service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Base URL of the storage API
    #[serde(default = "default_storage_url")]
    pub url: String,

    /// Request timeout in seconds (None: client default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl StorageConfig {
    /// Creates settings for the given base URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: None,
        }
    }

    /// URL of the create-or-update records endpoint.
    #[must_use]
    pub fn records_url(&self) -> String {
        format!("{}/records", self.url.trim_end_matches('/'))
    }

    /// Request timeout, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(default_storage_url())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty (default: "pretty")
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_storage_url() -> String {
    "http://localhost:8080/api/storage/v2".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
