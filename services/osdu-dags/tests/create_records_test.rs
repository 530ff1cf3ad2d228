//! End-to-end tests of the record-creation task against a mock storage service.

use std::io::Write;

use mockito::Matcher;
use osdu_core::{CoreError, RunConf, StaticVariables, StorageConfig, Variables, RECORD_KIND};
use osdu_dags::{create_records, TaskResult};
use osdu_storage::StorageClient;
use serde_json::{json, Value};

const KIND: &str = "opendes:osdu:well-master:0.2.0";

fn run_conf() -> RunConf {
    RunConf::from_value(json!({
        "acl": r#"{"viewers": ["data.default.viewers@opendes.example.com"], "owners": ["data.default.owners@opendes.example.com"]}"#,
        "legal-tags": r#"{"legaltags": ["opendes-public-usa-dataset-1"], "otherRelevantDataCountries": ["US", "CA"]}"#,
        "data": {"FacilityName": "Well 42", "SpudDate": "2020-01-01"},
        "partition-id": "opendes",
        "authorization": "Bearer token-123",
        "app-key": "app-key-abc"
    }))
    .unwrap()
}

fn expected_body() -> Value {
    json!([{
        "version": 0,
        "kind": KIND,
        "acl": {
            "viewers": ["data.default.viewers@opendes.example.com"],
            "owners": ["data.default.owners@opendes.example.com"]
        },
        "legal": {
            "legaltags": ["opendes-public-usa-dataset-1"],
            "otherRelevantDataCountries": ["US", "CA"],
            "status": "compliant"
        },
        "data": {"FacilityName": "Well 42", "SpudDate": "2020-01-01"},
        "ancestry": {"parents": []},
        "meta": [{}]
    }])
}

fn client_for(server: &mockito::ServerGuard) -> StorageClient {
    StorageClient::new(&StorageConfig::new(format!("{}/api/storage/v2", server.url()))).unwrap()
}

#[tokio::test]
async fn test_submits_record_and_returns_result() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/storage/v2/records")
        .match_header("content-type", "application/json")
        .match_header("slb-data-partition-id", "opendes")
        .match_header("authorization", "Bearer token-123")
        .match_header("appkey", "app-key-abc")
        .match_body(Matcher::Json(expected_body()))
        .with_status(201)
        .with_body(r#"{"recordCount":1,"recordIds":["opendes:doc:abc"],"skippedRecordIds":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let variables = StaticVariables::new().with(RECORD_KIND, KIND);
    let result = create_records(&run_conf(), &variables, &client_for(&server))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        result,
        TaskResult {
            response_status: 201,
            text: json!({"recordCount": 1, "recordIds": ["opendes:doc:abc"], "skippedRecordIds": []}),
        }
    );
}

#[tokio::test]
async fn test_kind_read_from_variables_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"record_kind": "{KIND}"}}"#).unwrap();
    let variables = Variables::load(Some(file.path())).unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/storage/v2/records")
        .match_body(Matcher::Regex(format!(r#""kind":"{KIND}""#)))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let result = create_records(&run_conf(), &variables, &client_for(&server))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.response_status, 201);
}

#[tokio::test]
async fn test_unauthorized_response_is_returned() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/api/storage/v2/records")
        .with_status(401)
        .with_body(r#"{"code":401,"reason":"Unauthorized","message":"The user is not authorized"}"#)
        .create_async()
        .await;

    let variables = StaticVariables::new().with(RECORD_KIND, KIND);
    let result = create_records(&run_conf(), &variables, &client_for(&server))
        .await
        .unwrap();

    assert_eq!(result.response_status, 401);
    assert_eq!(result.text["reason"], json!("Unauthorized"));
}

#[tokio::test]
async fn test_non_json_response_fails() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/api/storage/v2/records")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let variables = StaticVariables::new().with(RECORD_KIND, KIND);
    let err = create_records(&run_conf(), &variables, &client_for(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::InvalidResponse { status: 503, .. }));
}

#[tokio::test]
async fn test_invalid_input_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/storage/v2/records")
        .expect(0)
        .create_async()
        .await;

    let conf = RunConf::from_value(json!({
        "acl": "[1, 2",
        "legal-tags": r#"{"legaltags": [], "otherRelevantDataCountries": []}"#,
        "data": {},
        "partition-id": "opendes",
        "authorization": "Bearer token-123",
        "app-key": "app-key-abc"
    }))
    .unwrap();
    let variables = StaticVariables::new().with(RECORD_KIND, KIND);

    let err = create_records(&conf, &variables, &client_for(&server))
        .await
        .unwrap_err();

    assert!(err.is_input_error());
    mock.assert_async().await;
}
