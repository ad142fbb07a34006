/*
[INPUT]:  Mock gateway responses for the transaction pipeline
[OUTPUT]: End-to-end verification of postTask assembly and broadcast
[POS]:    Integration test layer - task creation flow
[UPDATE]: When adding new transaction scenarios
*/

mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::{setup_mock_server, CONTRACT};
use serde_json::json;
use taskmarket_adapter::{
    build_post_task_call, GatewayClient, MarketError, MockSigner, PostTask, Transaction,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const SENDER: &str = "erd1sender";

async fn mount_chain_metadata(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/network/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"config": {"erd_chain_id": "D", "erd_min_gas_price": 1_000_000_000u64}},
            "error": "",
            "code": "successful"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/address/{SENDER}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"account": {"address": SENDER, "nonce": 12, "balance": "9000000000000000000"}},
            "error": "",
            "code": "successful"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn post_task_assembles_signs_and_broadcasts_one_transaction() {
    let server = setup_mock_server().await;
    mount_chain_metadata(&server).await;

    let expected_data = STANDARD.encode(build_post_task_call("ubuntu:latest", "https://example.com/in", 3));
    Mock::given(method("POST"))
        .and(path("/transaction/send"))
        .and(body_partial_json(json!({
            "nonce": 12,
            "value": "500000000000000000",
            "receiver": CONTRACT,
            "sender": SENDER,
            "gasPrice": 1_000_000_000u64,
            "gasLimit": 20_000_000u64,
            "data": expected_data,
            "chainID": "D",
            "version": 1,
            "signature": "cafe",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"txHash": "6c5e"},
            "error": "",
            "code": "successful"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GatewayClient::new(&server.uri()).expect("client init");
    let signer = MockSigner::new(SENDER, "cafe");
    let tx_hash = client
        .post_task(
            PostTask {
                contract_address: CONTRACT,
                docker_image_uri: "ubuntu:latest",
                input_data_uri: "https://example.com/in",
                max_workers: 3,
                reward_base_units: "500000000000000000",
                gas_limit: 20_000_000,
            },
            &signer,
        )
        .await
        .expect("post task");

    assert_eq!(tx_hash, "6c5e");
}

#[tokio::test]
async fn gateway_rejection_surfaces_as_a_gateway_error() {
    let server = setup_mock_server().await;
    mount_chain_metadata(&server).await;

    Mock::given(method("POST"))
        .and(path("/transaction/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "error": "transaction generation failed: insufficient funds",
            "code": "internal_issue"
        })))
        .mount(&server)
        .await;

    let client = GatewayClient::new(&server.uri()).expect("client init");
    let signer = MockSigner::new(SENDER, "cafe");
    let err = client
        .post_task(
            PostTask {
                contract_address: CONTRACT,
                docker_image_uri: "ubuntu:latest",
                input_data_uri: "in",
                max_workers: 1,
                reward_base_units: "1",
                gas_limit: 20_000_000,
            },
            &signer,
        )
        .await
        .expect_err("expected gateway error");

    assert!(matches!(err, MarketError::Gateway { .. }));
}

#[tokio::test]
async fn broadcast_sends_the_exact_signed_payload() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/transaction/send"))
        .respond_with(move |request: &Request| {
            let tx: Transaction = serde_json::from_slice(&request.body).expect("transaction body");
            assert_eq!(tx.signature.as_deref(), Some("beef"));
            assert_eq!(tx.version, 1);
            ResponseTemplate::new(200).set_body_json(json!({
                "data": {"txHash": "77aa"},
                "error": "",
                "code": "successful"
            }))
        })
        .mount(&server)
        .await;

    let client = GatewayClient::new(&server.uri()).expect("client init");
    let tx = Transaction {
        nonce: 3,
        value: "0".to_string(),
        receiver: CONTRACT.to_string(),
        sender: SENDER.to_string(),
        gas_price: 1_000_000_000,
        gas_limit: 50_000,
        data: None,
        chain_id: "D".to_string(),
        version: 1,
        signature: Some("beef".to_string()),
    };

    let tx_hash = client.send_transaction(&tx).await.expect("broadcast");
    assert_eq!(tx_hash, "77aa");
}
