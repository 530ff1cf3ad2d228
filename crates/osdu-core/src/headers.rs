//! Request headers sent to the storage service.

use std::fmt;

/// Content type header name.
pub const CONTENT_TYPE: &str = "content-type";
/// Data partition header name.
pub const DATA_PARTITION_ID: &str = "slb-data-partition-id";
/// Bearer token header name.
pub const AUTHORIZATION: &str = "Authorization";
/// Application key header name.
pub const APP_KEY: &str = "AppKey";

/// Content type of every record submission.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Caller-supplied headers for a record submission.
///
/// Values are carried verbatim; nothing is validated, escaped or trimmed.
/// `Debug` masks the bearer token and the app key.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    partition_id: String,
    authorization: String,
    app_key: String,
}

impl RequestHeaders {
    /// Creates headers from the caller's partition id, bearer token and app key.
    #[must_use]
    pub fn new(
        partition_id: impl Into<String>,
        authorization: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Self {
        Self {
            partition_id: partition_id.into(),
            authorization: authorization.into(),
            app_key: app_key.into(),
        }
    }

    /// Data partition the record belongs to.
    #[must_use]
    pub fn partition_id(&self) -> &str {
        &self.partition_id
    }

    /// Bearer token, exactly as supplied.
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Application key, exactly as supplied.
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Returns the four wire headers in a stable order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (CONTENT_TYPE, JSON_CONTENT_TYPE),
            (DATA_PARTITION_ID, &self.partition_id),
            (AUTHORIZATION, &self.authorization),
            (APP_KEY, &self.app_key),
        ]
    }
}

impl fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHeaders")
            .field("partition_id", &self.partition_id)
            .field("authorization", &"<redacted>")
            .field("app_key", &"<redacted>")
            .finish()
    }
}
