use thiserror::Error;

/// Canonical error type for record-ingestion tasks.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The run configuration was not a JSON object.
    #[error("run configuration must be a JSON object")]
    NotAnObject,

    /// A required key was absent from the run configuration or a nested document.
    #[error("required key `{key}` is missing")]
    MissingKey {
        /// Dotted path of the missing key (e.g. `"acl.viewers"`).
        key: String,
    },

    /// A key was present but carried the wrong JSON type.
    #[error("key `{key}` must be {expected}")]
    InvalidType {
        /// Dotted path of the offending key.
        key: String,
        /// Human-readable description of the expected type.
        expected: &'static str,
    },

    /// A JSON-encoded value could not be parsed.
    #[error("`{key}` is not valid JSON: {source}")]
    InvalidJson {
        /// Name of the field that carried the malformed document.
        key: String,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The storage service answered with a body that is not JSON.
    #[error("response body (status {status}) is not valid JSON: {source}")]
    InvalidResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A variable was not set in the variable store.
    #[error("variable `{key}` is not set")]
    VariableNotFound {
        /// Variable name.
        key: String,
    },

    /// The variable store could not be loaded.
    #[error("variable store error: {0}")]
    Variables(String),

    /// A header value could not be encoded as HTTP header text.
    #[error("header `{name}` has a value that is not valid header text")]
    InvalidHeader {
        /// Header name.
        name: &'static str,
    },

    /// The outbound HTTP request failed before a response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// Service configuration failed to load or validate.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading inputs.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CoreError {
    /// Creates a `MissingKey` variant.
    #[must_use]
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Creates an `InvalidType` variant.
    #[must_use]
    pub fn invalid_type(key: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            key: key.into(),
            expected,
        }
    }

    /// Creates an `InvalidJson` variant.
    #[must_use]
    pub fn invalid_json(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            key: key.into(),
            source,
        }
    }

    /// Creates a `VariableNotFound` variant.
    #[must_use]
    pub fn variable_not_found(key: impl Into<String>) -> Self {
        Self::VariableNotFound { key: key.into() }
    }

    /// Returns true for failures detected while reading task inputs, i.e.
    /// before any request could have been sent.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NotAnObject
                | Self::MissingKey { .. }
                | Self::InvalidType { .. }
                | Self::InvalidJson { .. }
                | Self::VariableNotFound { .. }
                | Self::Variables(_)
        )
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Convenient result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
