/*
[INPUT]:  Task parameters, account state, and a transaction signer
[OUTPUT]: Signed postTask transactions broadcast through the gateway
[POS]:    HTTP layer - transaction assembly and broadcast
[UPDATE]: When the contract endpoint signature or gas policy changes
*/

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Method;
use tracing::info;

use crate::auth::TransactionSigner;
use crate::http::{GatewayClient, Result};
use crate::types::{GatewayEnvelope, SendTransactionData, Transaction};

/// Gateway transaction format version
pub const TRANSACTION_VERSION: u32 = 1;

/// Parameters for one `postTask` contract call. The reward rides as the
/// native-currency transfer; the other three values become call arguments.
#[derive(Debug, Clone)]
pub struct PostTask<'a> {
    pub contract_address: &'a str,
    pub docker_image_uri: &'a str,
    pub input_data_uri: &'a str,
    pub max_workers: u32,
    /// Base-unit integer string, already denominated.
    pub reward_base_units: &'a str,
    pub gas_limit: u64,
}

impl GatewayClient {
    /// Broadcast a signed transaction
    ///
    /// POST /transaction/send
    pub async fn send_transaction(&self, tx: &Transaction) -> Result<String> {
        let builder = self.request(Method::POST, "/transaction/send")?.json(tx);
        let envelope: GatewayEnvelope<SendTransactionData> = self.send_json(builder).await?;
        Ok(envelope.into_result()?.tx_hash)
    }

    /// Assemble, sign, and broadcast one `postTask` call. Exactly one
    /// transaction per invocation; sequencing uses the sender's current
    /// account nonce and the chain's minimum gas price.
    pub async fn post_task(&self, params: PostTask<'_>, signer: &dyn TransactionSigner) -> Result<String> {
        let network = self.get_network_config().await?;
        let account = self.get_account(signer.address()).await?;

        let call_data = build_post_task_call(
            params.docker_image_uri,
            params.input_data_uri,
            params.max_workers,
        );
        let mut tx = Transaction {
            nonce: account.nonce,
            value: params.reward_base_units.to_string(),
            receiver: params.contract_address.to_string(),
            sender: signer.address().to_string(),
            gas_price: network.min_gas_price,
            gas_limit: params.gas_limit,
            data: Some(STANDARD.encode(call_data.as_bytes())),
            chain_id: network.chain_id,
            version: TRANSACTION_VERSION,
            signature: None,
        };

        let payload = tx.signing_payload()?;
        tx.signature = Some(signer.sign(&payload).await?);

        let tx_hash = self.send_transaction(&tx).await?;
        info!(%tx_hash, nonce = tx.nonce, "postTask transaction broadcast");
        Ok(tx_hash)
    }
}

/// Call data for the contract's `postTask` endpoint:
/// `postTask@<hex image>@<hex input>@<hex max_workers>`
pub fn build_post_task_call(docker_image_uri: &str, input_data_uri: &str, max_workers: u32) -> String {
    format!(
        "postTask@{}@{}@{}",
        encode_string_arg(docker_image_uri),
        encode_string_arg(input_data_uri),
        encode_u32_arg(max_workers),
    )
}

/// Hex encoding of a UTF-8 string argument
pub fn encode_string_arg(value: &str) -> String {
    hex::encode(value.as_bytes())
}

/// Minimal big-endian hex encoding of a u32 argument; zero encodes to the
/// empty byte string per the contract serialization rules
pub fn encode_u32_arg(value: u32) -> String {
    encode_minimal_be(&value.to_be_bytes())
}

/// Minimal big-endian hex encoding of a u64 argument
pub fn encode_u64_arg(value: u64) -> String {
    encode_minimal_be(&value.to_be_bytes())
}

fn encode_minimal_be(bytes: &[u8]) -> String {
    match bytes.iter().position(|b| *b != 0) {
        Some(first) => hex::encode(&bytes[first..]),
        None => String::new(),
    }
}
