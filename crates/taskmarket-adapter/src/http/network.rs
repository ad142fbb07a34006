/*
[INPUT]:  Gateway envelope responses for chain metadata
[OUTPUT]: Network configuration and account state
[POS]:    HTTP layer - chain metadata endpoints
[UPDATE]: When adding new metadata endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{GatewayClient, Result};
use crate::types::{Account, AccountData, GatewayEnvelope, NetworkConfig, NetworkConfigData};

impl GatewayClient {
    /// Fetch chain id and minimum gas price. The result is threaded
    /// explicitly into transaction assembly instead of living in globals.
    ///
    /// GET /network/config
    pub async fn get_network_config(&self) -> Result<NetworkConfig> {
        let builder = self.request(Method::GET, "/network/config")?;
        let envelope: GatewayEnvelope<NetworkConfigData> = self.send_json(builder).await?;
        Ok(envelope.into_result()?.config)
    }

    /// Fetch account state, used for transaction sequencing
    ///
    /// GET /address/{bech32}
    pub async fn get_account(&self, address: &str) -> Result<Account> {
        let endpoint = format!("/address/{address}");
        let builder = self.request(Method::GET, &endpoint)?;
        let envelope: GatewayEnvelope<AccountData> = self.send_json(builder).await?;
        Ok(envelope.into_result()?.account)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::GatewayClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn network_config_unwraps_the_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/network/config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "config": {
                        "erd_chain_id": "D",
                        "erd_min_gas_price": 1_000_000_000u64
                    }
                },
                "error": "",
                "code": "successful"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GatewayClient::new(&server.uri()).expect("client init");
        let config = client.get_network_config().await.expect("network config");

        assert_eq!(config.chain_id, "D");
        assert_eq!(config.min_gas_price, 1_000_000_000);
    }

    #[tokio::test]
    async fn account_nonce_is_read_from_the_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/address/erd1sender"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "account": {
                        "address": "erd1sender",
                        "nonce": 12,
                        "balance": "5000000000000000000"
                    }
                },
                "error": "",
                "code": "successful"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GatewayClient::new(&server.uri()).expect("client init");
        let account = client.get_account("erd1sender").await.expect("account");

        assert_eq!(account.nonce, 12);
        assert_eq!(account.balance, "5000000000000000000");
    }
}
