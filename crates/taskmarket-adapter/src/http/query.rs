/*
[INPUT]:  Contract view names and hex-encoded call arguments
[OUTPUT]: Normalized task records from decoded query responses
[POS]:    HTTP layer - read-only contract queries
[UPDATE]: When adding new contract views or changing probe policy
*/

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::decode::{decode_status, number_field};
use crate::http::tx::encode_u64_arg;
use crate::http::{GatewayClient, MarketError, Result};
use crate::types::{QueryRequest, QueryResponse, Task, TaskStatus};

impl GatewayClient {
    /// Run one read-only contract query through the gateway's decoding layer
    ///
    /// POST /query
    pub(crate) async fn run_query(
        &self,
        contract: &str,
        func_name: &str,
        args: Vec<String>,
    ) -> Result<Vec<Value>> {
        let request = QueryRequest {
            sc_address: contract.to_string(),
            func_name: func_name.to_string(),
            args,
        };
        let builder = self.request(Method::POST, "/query")?.json(&request);
        let response: QueryResponse = self.send_json(builder).await?;
        if response.return_code != "ok" {
            let message = if response.return_message.is_empty() {
                response.return_code
            } else {
                response.return_message
            };
            return Err(MarketError::Query { message });
        }
        Ok(response.return_data)
    }

    /// Probe one storage slot. Any failure (transport, gateway, rejected
    /// query) means the slot is treated as absent, never surfaced.
    pub async fn query_task(&self, contract: &str, index: u64) -> Result<Option<Task>> {
        match self
            .run_query(contract, "getTask", vec![encode_u64_arg(index)])
            .await
        {
            Ok(values) => Ok(values.first().map(|value| Task::from_decoded(index, value))),
            Err(err) => {
                debug!(index, error = %err, "task probe failed, treating slot as absent");
                Ok(None)
            }
        }
    }

    /// Number of tasks ever posted (`getTaskIdCounter` view)
    pub async fn query_task_count(&self, contract: &str) -> Result<u64> {
        let values = self.run_query(contract, "getTaskIdCounter", Vec::new()).await?;
        Ok(values.first().map(number_field).unwrap_or(0))
    }

    /// Status of a single task (`getTaskStatus` view), run through the same
    /// normalization chain as full records
    pub async fn query_task_status(&self, contract: &str, index: u64) -> Result<TaskStatus> {
        let values = self
            .run_query(contract, "getTaskStatus", vec![encode_u64_arg(index)])
            .await?;
        Ok(values.first().map(decode_status).unwrap_or_default())
    }

    /// Fetch one page of tasks: resolve the task count, then probe each index
    /// in `offset..offset+limit` sequentially, in ascending order. Failed
    /// probes are omitted from the result, never represented as placeholders.
    ///
    /// Older contract deployments never exposed the count view; when it
    /// fails, fall back to probing the window blindly.
    pub async fn list_tasks(&self, contract: &str, offset: u64, limit: u64) -> Result<Vec<Task>> {
        let end = match self.query_task_count(contract).await {
            Ok(count) => count.min(offset.saturating_add(limit)),
            Err(err) => {
                debug!(error = %err, "task count unavailable, probing the window blindly");
                offset.saturating_add(limit)
            }
        };

        let mut tasks = Vec::new();
        for index in offset..end {
            if let Some(task) = self.query_task(contract, index).await? {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }
}
