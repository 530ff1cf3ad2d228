use async_trait::async_trait;

use crate::error::CoreResult;
use crate::headers::RequestHeaders;
use crate::record::Record;

/// Raw answer of the storage service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body, undecoded
    pub body: String,
}

impl StorageResponse {
    /// Creates a response from a status code and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client interface of the record storage service.
///
/// Every status the service answers with is returned as a `StorageResponse`;
/// only failures to obtain a response are errors.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates records, or updates them when they already exist.
    async fn create_update_records(
        &self,
        records: &[Record],
        headers: &RequestHeaders,
    ) -> CoreResult<StorageResponse>;
}
