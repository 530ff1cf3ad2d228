//! In-memory record store for testing
//!
//! Answers every call with a configured response (or failure) and keeps a
//! history of what it was sent, so tests can assert on records and headers
//! without a storage service.
//!
//! ```rust
//! use osdu_core::{RecordStore, RequestHeaders};
//! use osdu_storage::MockRecordStore;
//!
//! # async fn example() -> osdu_core::CoreResult<()> {
//! let mock = MockRecordStore::responding(201, r#"{"recordCount": 0}"#);
//! let headers = RequestHeaders::new("opendes", "Bearer t", "key");
//!
//! let response = mock.create_update_records(&[], &headers).await?;
//! assert_eq!(response.status, 201);
//! assert_eq!(mock.call_count(), 1);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

use osdu_core::{CoreError, CoreResult, Record, RecordStore, RequestHeaders, StorageResponse};

/// Scripted outcome of one mock call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The service answers with this status and body.
    Respond {
        /// HTTP status code
        status: u16,
        /// Raw body
        body: String,
    },

    /// The request never gets an answer (connection refused, timeout, ...).
    Fail(&'static str),
}

impl MockResponse {
    fn into_result(self) -> CoreResult<StorageResponse> {
        match self {
            MockResponse::Respond { status, body } => Ok(StorageResponse::new(status, body)),
            MockResponse::Fail(msg) => Err(CoreError::Transport(msg.to_string())),
        }
    }
}

/// One recorded call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Records passed to the store
    pub records: Vec<Record>,

    /// Headers passed to the store
    pub headers: RequestHeaders,
}

/// Mock `RecordStore` with scripted responses and call history.
///
/// Scripted responses are consumed in order; once exhausted the default
/// response answers every further call.
#[derive(Debug, Clone)]
pub struct MockRecordStore {
    script: Arc<RwLock<VecDeque<MockResponse>>>,
    default: MockResponse,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
}

impl MockRecordStore {
    /// Creates a mock that always answers with `status` and `body`.
    #[must_use]
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self::with_default(MockResponse::Respond {
            status,
            body: body.into(),
        })
    }

    /// Creates a mock whose every call fails at the transport level.
    #[must_use]
    pub fn failing(msg: &'static str) -> Self {
        Self::with_default(MockResponse::Fail(msg))
    }

    /// Creates a mock that plays `script` before falling back to `default`.
    #[must_use]
    pub fn with_script(script: Vec<MockResponse>, default: MockResponse) -> Self {
        Self {
            script: Arc::new(RwLock::new(script.into())),
            default,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn with_default(default: MockResponse) -> Self {
        Self::with_script(Vec::new(), default)
    }

    /// Returns every call received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().clone()
    }

    /// Number of calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }

    /// Most recent call, if any.
    #[must_use]
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.read().last().cloned()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn create_update_records(
        &self,
        records: &[Record],
        headers: &RequestHeaders,
    ) -> CoreResult<StorageResponse> {
        self.calls.write().push(RecordedCall {
            records: records.to_vec(),
            headers: headers.clone(),
        });

        let next = self.script.write().pop_front();
        next.unwrap_or_else(|| self.default.clone()).into_result()
    }
}
