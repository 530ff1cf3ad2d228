//! Core domain types and traits for OSDU record-ingestion workflows.

pub mod acl;
pub mod config;
pub mod error;
pub mod headers;
pub mod legal;
pub mod record;
pub mod run_conf;
pub mod traits;
pub mod variables;

pub use crate::config::{DagsConfig, LoggingConfig, StorageConfig};
pub use acl::Acl;
pub use error::{CoreError, CoreResult};
pub use headers::RequestHeaders;
pub use legal::{Legal, LegalCompliance};
pub use record::{Record, RecordAncestry};
pub use run_conf::RunConf;
pub use traits::{RecordStore, StorageResponse};
pub use variables::{StaticVariables, VariableStore, Variables, RECORD_KIND};
