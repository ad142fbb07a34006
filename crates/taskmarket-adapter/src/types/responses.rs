/*
[INPUT]:  Gateway and worker schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for gateway and worker communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{MarketError, Result};

/// Every gateway response arrives wrapped as `{data, error, code}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayEnvelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub code: String,
}

impl<T> GatewayEnvelope<T> {
    pub fn into_result(self) -> Result<T> {
        if !self.error.is_empty() {
            return Err(MarketError::Gateway { message: self.error });
        }
        self.data
            .ok_or_else(|| MarketError::InvalidResponse("gateway response missing data".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfigData {
    pub config: NetworkConfig,
}

/// Chain parameters threaded explicitly into the creation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(rename = "erd_chain_id")]
    pub chain_id: String,
    #[serde(rename = "erd_min_gas_price")]
    pub min_gas_price: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub address: String,
    pub nonce: u64,
    #[serde(default)]
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendTransactionData {
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

/// Contract query response after external decoding. `return_data` values are
/// loosely typed; the decode module normalizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "returnCode")]
    pub return_code: String,
    #[serde(default, rename = "returnMessage")]
    pub return_message: String,
    #[serde(default, rename = "returnData")]
    pub return_data: Vec<Value>,
}

/// Successful worker hand-off: the submission transaction hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerReceipt {
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

/// Worker error body; `message` is optional on purpose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerFailure {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_error_converts_to_gateway_error() {
        let envelope: GatewayEnvelope<SendTransactionData> = serde_json::from_str(
            r#"{"data": null, "error": "transaction generation failed", "code": "internal_issue"}"#,
        )
        .expect("envelope should deserialize");

        let err = envelope.into_result().expect_err("expected gateway error");
        assert!(matches!(err, MarketError::Gateway { .. }));
    }

    #[test]
    fn envelope_without_data_is_invalid() {
        let envelope: GatewayEnvelope<SendTransactionData> =
            serde_json::from_str(r#"{"error": "", "code": "successful"}"#)
                .expect("envelope should deserialize");

        let err = envelope.into_result().expect_err("expected invalid response");
        assert!(matches!(err, MarketError::InvalidResponse(_)));
    }

    #[test]
    fn envelope_with_data_unwraps() {
        let envelope: GatewayEnvelope<SendTransactionData> = serde_json::from_str(
            r#"{"data": {"txHash": "0xabc"}, "error": "", "code": "successful"}"#,
        )
        .expect("envelope should deserialize");

        let data = envelope.into_result().expect("data");
        assert_eq!(data.tx_hash, "0xabc");
    }
}
