/*
[INPUT]:  Task parameters for one delegated execution
[OUTPUT]: Worker receipts or typed delegation failures
[POS]:    HTTP layer - local worker process endpoint
[UPDATE]: When the worker protocol changes
*/

use reqwest::{Client, Url};

use crate::http::{ClientConfig, MarketError, Result};
use crate::types::{ProcessTaskRequest, WorkerFailure, WorkerReceipt};

/// Where the user-operated worker process listens by default
pub const DEFAULT_WORKER_URL: &str = "http://localhost:5005";

/// HTTP client for the local worker process
#[derive(Debug, Clone)]
pub struct WorkerClient {
    http_client: Client,
    base_url: Url,
}

impl WorkerClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        Ok(Self {
            http_client: config.build_client()?,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Hand one task to the worker and wait for its receipt. Fire-and-wait
    /// semantics: no retry, no progress streaming, bounded only by the
    /// client timeouts.
    ///
    /// POST /process_task
    pub async fn process_task(
        &self,
        task_id: u64,
        image: &str,
        input_data: &str,
    ) -> Result<WorkerReceipt> {
        let request = ProcessTaskRequest {
            task_id,
            image: image.to_string(),
            input_data: input_data.to_string(),
        };
        let url = self.base_url.join("/process_task")?;
        let response = self.http_client.post(url).json(&request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<WorkerReceipt>().await?);
        }

        let failure = response.json::<WorkerFailure>().await.unwrap_or_default();
        Err(MarketError::WorkerService {
            message: failure
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        })
    }
}
