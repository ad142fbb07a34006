/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskmarket-adapter tests

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const CONTRACT: &str = "erd1qqqqqqqqqqqqqpgqcontract";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mount a successful decoded query response for one contract view call
#[allow(dead_code)]
pub async fn mount_query(server: &MockServer, func_name: &str, args: Value, return_data: Value) {
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_partial_json(json!({
            "funcName": func_name,
            "args": args,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "returnCode": "ok",
            "returnMessage": "",
            "returnData": return_data,
        })))
        .mount(server)
        .await;
}

/// Mount a rejected query (the virtual machine refused it)
#[allow(dead_code)]
pub async fn mount_query_failure(server: &MockServer, func_name: &str, args: Value, message: &str) {
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_partial_json(json!({
            "funcName": func_name,
            "args": args,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "returnCode": "user error",
            "returnMessage": message,
            "returnData": [],
        })))
        .mount(server)
        .await;
}

/// A fully-populated decoded task record with a named-variant status
#[allow(dead_code)]
pub fn decoded_task(status: Value) -> Value {
    json!({
        "creator": "erd1creator",
        "docker_image_uri": "ubuntu:latest",
        "input_data_uri": "https://example.com/data.json",
        "reward_amount": "1000000000000000000",
        "max_workers": 3,
        "submissions_count": 0,
        "status": status,
    })
}
