//! Process-wide workflow variables.
//!
//! Variables are read at call time. The file-and-environment store follows
//! the orchestration engine's convention of exposing `record_kind` as
//! `AIRFLOW_VAR_RECORD_KIND`.

use std::collections::HashMap;
use std::path::Path;

use config::{Config, Environment, File};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Variable holding the schema kind of created records.
pub const RECORD_KIND: &str = "record_kind";

/// Environment prefix of workflow variables.
pub const ENV_PREFIX: &str = "AIRFLOW_VAR";

/// Read-only lookup of named workflow variables.
pub trait VariableStore: Send + Sync {
    /// Returns the value of `key`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::VariableNotFound` when the variable is not set.
    fn get(&self, key: &str) -> CoreResult<String>;
}

/// Variables loaded from an optional file, overlaid by `AIRFLOW_VAR_*`
/// environment variables. Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    values: HashMap<String, String>,
}

impl Variables {
    /// Loads variables from `file` (JSON, YAML or TOML, one flat table) and
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Variables` if the file cannot be read or parsed,
    /// or holds a value that is not a scalar.
    pub fn load(file: Option<&Path>) -> CoreResult<Self> {
        Self::load_with_env(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(file: Option<&Path>, env: Environment) -> CoreResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(env.try_parsing(false));

        let raw: HashMap<String, config::Value> = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CoreError::Variables(e.to_string()))?;

        let mut values = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let value = value
                .into_string()
                .map_err(|e| CoreError::Variables(format!("variable `{key}`: {e}")))?;
            values.insert(key.to_lowercase(), value);
        }

        debug!("Loaded {} workflow variables", values.len());
        Ok(Self { values })
    }

    /// Number of loaded variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no variable is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VariableStore for Variables {
    fn get(&self, key: &str) -> CoreResult<String> {
        self.values
            .get(&key.to_lowercase())
            .cloned()
            .ok_or_else(|| CoreError::variable_not_found(key))
    }
}

/// In-memory variables.
#[derive(Debug, Clone, Default)]
pub struct StaticVariables {
    values: HashMap<String, String>,
}

impl StaticVariables {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl VariableStore for StaticVariables {
    fn get(&self, key: &str) -> CoreResult<String> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::variable_not_found(key))
    }
}
