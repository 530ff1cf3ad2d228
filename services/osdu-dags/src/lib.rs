//! OSDU workflow tasks.
//!
//! [`create_records`] turns a workflow run configuration into a new storage
//! record and submits it; the `osdu-dags` binary runs it the way the
//! orchestration engine would.

pub mod create_records;
pub mod input;
pub mod telemetry;

pub use create_records::{build_record, create_records, TaskResult};
