/*
[INPUT]:  Wallet PEM path, gateway URL, and contract address (env)
[OUTPUT]: One broadcast postTask transaction
[POS]:    Examples - task creation through the signing seam
[UPDATE]: When the creation API changes
*/

use taskmarket_adapter::{parse_amount, GatewayClient, PemWallet, PostTask};

/// Example: Post a task (requires TASKMARKET_WALLET_PEM)
#[tokio::main]
async fn main() {
    let gateway_url = std::env::var("TASKMARKET_GATEWAY")
        .unwrap_or_else(|_| "https://devnet-gateway.multiversx.com".to_string());
    let contract = std::env::var("TASKMARKET_CONTRACT")
        .unwrap_or_else(|_| "erd1qqqqqqqqqqqqqpgqfgayg3ykmn6jluazdfhka02y3q9vjc8wnc0syn2dwx".to_string());
    let Ok(wallet_pem) = std::env::var("TASKMARKET_WALLET_PEM") else {
        eprintln!("Set TASKMARKET_WALLET_PEM to a wallet PEM file");
        return;
    };

    let wallet = match PemWallet::from_file(&wallet_pem) {
        Ok(wallet) => wallet,
        Err(err) => {
            eprintln!("Failed to load wallet: {err}");
            return;
        }
    };
    let client = match GatewayClient::new(&gateway_url) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to create client: {err}");
            return;
        }
    };

    let reward = match parse_amount("0.01", 18) {
        Ok(reward) => reward,
        Err(err) => {
            eprintln!("Bad reward amount: {err}");
            return;
        }
    };

    println!("Posting task to {contract}...");
    let result = client
        .post_task(
            PostTask {
                contract_address: &contract,
                docker_image_uri: "hashcloak/sum-of-squares:latest",
                input_data_uri: "https://example.com/input.json",
                max_workers: 3,
                reward_base_units: &reward,
                gas_limit: 20_000_000,
            },
            &wallet,
        )
        .await;

    match result {
        Ok(tx_hash) => println!("Task created. Tx: {tx_hash}"),
        Err(err) => eprintln!("Error creating task: {err}"),
    }
}
