/*
[INPUT]:  Gateway URL and contract address (env or defaults)
[OUTPUT]: Printed task board with normalized statuses
[POS]:    Examples - read-only board listing
[UPDATE]: When the listing API changes
*/

use taskmarket_adapter::GatewayClient;

/// Example: List the first page of the task board (no wallet required)
#[tokio::main]
async fn main() {
    let gateway_url = std::env::var("TASKMARKET_GATEWAY")
        .unwrap_or_else(|_| "https://devnet-gateway.multiversx.com".to_string());
    let contract = std::env::var("TASKMARKET_CONTRACT")
        .unwrap_or_else(|_| "erd1qqqqqqqqqqqqqpgqfgayg3ykmn6jluazdfhka02y3q9vjc8wnc0syn2dwx".to_string());

    let client = match GatewayClient::new(&gateway_url) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to create client: {err}");
            return;
        }
    };

    println!("Fetching tasks from {contract}...\n");
    match client.list_tasks(&contract, 0, 10).await {
        Ok(tasks) if tasks.is_empty() => println!("No tasks found."),
        Ok(tasks) => {
            for task in tasks {
                println!(
                    "#{} [{}] {} | reward {} base units | workers {}/{}",
                    task.id,
                    task.status,
                    task.docker_image_uri,
                    task.reward_amount,
                    task.submissions_count,
                    task.max_workers,
                );
            }
        }
        Err(err) => eprintln!("Error fetching tasks: {err}"),
    }
}
