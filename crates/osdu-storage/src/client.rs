//! HTTP client of the storage service.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info};

use osdu_core::{
    CoreError, CoreResult, Record, RecordStore, RequestHeaders, StorageConfig, StorageResponse,
};

/// Storage API client sending record batches to `PUT <url>/records`.
///
/// No retries are attempted; the timeout is the configured one or the
/// `reqwest` default.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    records_url: String,
}

impl StorageClient {
    /// Creates a client for the configured storage service.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &StorageConfig) -> CoreResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| CoreError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            records_url: config.records_url(),
        })
    }

    /// Endpoint that receives record batches.
    #[must_use]
    pub fn records_url(&self) -> &str {
        &self.records_url
    }

    fn header_map(headers: &RequestHeaders) -> CoreResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(4);
        for (name, value) in headers.entries() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| CoreError::InvalidHeader { name })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| CoreError::InvalidHeader { name })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

#[async_trait]
impl RecordStore for StorageClient {
    async fn create_update_records(
        &self,
        records: &[Record],
        headers: &RequestHeaders,
    ) -> CoreResult<StorageResponse> {
        let header_map = Self::header_map(headers)?;

        debug!(
            "PUT {} ({} records, partition {})",
            self.records_url,
            records.len(),
            headers.partition_id()
        );

        let response = self
            .http
            .put(&self.records_url)
            .headers(header_map)
            .json(records)
            .send()
            .await
            .map_err(|e| CoreError::Transport(format!("PUT {} failed: {}", self.records_url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::Transport(format!("failed to read response body: {}", e)))?;

        info!("Storage service answered {} for {} records", status, records.len());

        Ok(StorageResponse::new(status, body))
    }
}
