//! Record storage service clients.
//!
//! - [`StorageClient`]: HTTP client of the storage API (production)
//! - [`MockRecordStore`]: in-memory stand-in with call history (testing)

mod client;
mod mock;

pub use client::StorageClient;
pub use mock::{MockRecordStore, MockResponse, RecordedCall};
