/*
[INPUT]:  Mock worker endpoint responses
[OUTPUT]: End-to-end verification of the delegation hand-off
[POS]:    Integration test layer - worker delegation flow
[UPDATE]: When the worker protocol changes
*/

mod common;

use common::setup_mock_server;
use serde_json::json;
use taskmarket_adapter::{MarketError, WorkerClient};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn successful_hand_off_returns_the_submission_hash() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/process_task"))
        .and(body_json(json!({
            "taskId": 4,
            "image": "ubuntu:latest",
            "inputData": "https://example.com/data.json",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"txHash": "0xabc"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = WorkerClient::new(&server.uri()).expect("client init");
    let receipt = client
        .process_task(4, "ubuntu:latest", "https://example.com/data.json")
        .await
        .expect("worker receipt");

    assert_eq!(receipt.tx_hash, "0xabc");
}

#[tokio::test]
async fn service_error_carries_the_worker_message_verbatim() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/process_task"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "oom"})))
        .mount(&server)
        .await;

    let client = WorkerClient::new(&server.uri()).expect("client init");
    let err = client
        .process_task(1, "img", "in")
        .await
        .expect_err("expected worker error");

    match err {
        MarketError::WorkerService { message } => assert_eq!(message, "oom"),
        other => panic!("expected WorkerService error, got {other:?}"),
    }
}

#[tokio::test]
async fn service_error_without_a_message_reads_as_unknown() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/process_task"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = WorkerClient::new(&server.uri()).expect("client init");
    let err = client
        .process_task(1, "img", "in")
        .await
        .expect_err("expected worker error");

    match err {
        MarketError::WorkerService { message } => assert_eq!(message, "Unknown error"),
        other => panic!("expected WorkerService error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_worker_reads_as_a_connectivity_failure() {
    // nothing listens on this port; connection is refused immediately
    let client = WorkerClient::new("http://127.0.0.1:1").expect("client init");
    let err = client
        .process_task(1, "img", "in")
        .await
        .expect_err("expected connection failure");

    assert!(err.is_connectivity());
}
