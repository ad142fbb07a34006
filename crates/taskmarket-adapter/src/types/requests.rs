/*
[INPUT]:  Gateway and worker schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for gateway and worker communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::http::Result;

/// Read-only contract query, answered by the gateway's decoding layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(rename = "scAddress")]
    pub sc_address: String,
    #[serde(rename = "funcName")]
    pub func_name: String,
    /// Hex-encoded call arguments, minimal big-endian for numbers.
    pub args: Vec<String>,
}

/// Transaction in the gateway's wire shape. Field order matters: the signing
/// payload is the canonical JSON serialization of the unsigned transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub nonce: u64,
    /// Native-currency transfer in base units, as a decimal string.
    pub value: String,
    pub receiver: String,
    pub sender: String,
    #[serde(rename = "gasPrice")]
    pub gas_price: u64,
    #[serde(rename = "gasLimit")]
    pub gas_limit: u64,
    /// Base64 of the contract call data, absent for plain transfers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Transaction {
    /// Bytes the wallet signs: the transaction serialized without its
    /// signature field.
    pub fn signing_payload(&self) -> Result<Vec<u8>> {
        let mut unsigned = self.clone();
        unsigned.signature = None;
        Ok(serde_json::to_vec(&unsigned)?)
    }
}

/// Hand-off of one task to the local worker process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessTaskRequest {
    #[serde(rename = "taskId")]
    pub task_id: u64,
    pub image: String,
    #[serde(rename = "inputData")]
    pub input_data: String,
}
