//! Record-creation task.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use osdu_core::{
    CoreError, CoreResult, Record, RecordStore, RunConf, VariableStore, RECORD_KIND,
};

/// Value returned to the orchestration engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// HTTP status answered by the storage service
    pub response_status: u16,

    /// Parsed response body
    pub text: JsonValue,
}

/// Builds the record a run submits.
///
/// The kind comes from the `record_kind` variable, never from the run
/// configuration. The record carries no id and version 0.
///
/// # Errors
///
/// Fails on malformed `acl` / `legal-tags` documents, missing nested keys, or
/// an unset `record_kind` variable.
pub fn build_record(conf: &RunConf, variables: &dyn VariableStore) -> CoreResult<Record> {
    let acl = conf.acl()?;
    let legal = conf.legal()?;
    let kind = variables.get(RECORD_KIND)?;

    Ok(Record::new(kind, acl, legal, conf.data().clone()))
}

/// Builds a record from `conf` and submits it to `store` as a one-element batch.
///
/// Inputs are fully validated before the store is called. Whatever status the
/// service answers with is returned, provided its body is JSON.
///
/// # Errors
///
/// - errors of [`build_record`], raised before any request
/// - `CoreError::Transport` / `CoreError::InvalidHeader` from the store
/// - `CoreError::InvalidResponse` if the body is not JSON, whatever the status
pub async fn create_records(
    conf: &RunConf,
    variables: &dyn VariableStore,
    store: &dyn RecordStore,
) -> CoreResult<TaskResult> {
    let record = build_record(conf, variables)?;
    let headers = conf.headers();

    info!(
        "Submitting new record of kind '{}' to partition '{}'",
        record.kind,
        headers.partition_id()
    );
    debug!("Request headers: {:?}", headers);

    let response = store
        .create_update_records(std::slice::from_ref(&record), &headers)
        .await?;

    let text = serde_json::from_str(&response.body).map_err(|source| {
        CoreError::InvalidResponse {
            status: response.status,
            source,
        }
    })?;

    info!("Record submission finished with status {}", response.status);

    Ok(TaskResult {
        response_status: response.status,
        text,
    })
}
