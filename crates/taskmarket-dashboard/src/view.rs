/*
[INPUT]:  Tasks and flow outcomes
[OUTPUT]: User-facing strings shared by CLI, interactive, and TUI modes
[POS]:    Presentation layer - message and label formatting
[UPDATE]: When user-facing wording changes
*/

use taskmarket_adapter::{format_amount, Task};

use crate::app::{DelegationOutcome, REWARD_DECIMALS};

/// Ticker of the native token rewards are paid in
pub const REWARD_TICKER: &str = "EGLD";

const REWARD_DISPLAY_DIGITS: u32 = 4;

/// Transaction-feedback wording for the creation flow
pub const CREATING_TASK_MESSAGE: &str = "Creating task...";
pub const CREATE_ERROR_MESSAGE: &str = "An error has occurred during task creation";

pub fn create_success_message(tx_hash: &str) -> String {
    format!("Task created successfully. Tx: {tx_hash}")
}

pub fn format_reward(task: &Task) -> String {
    format!(
        "{} {REWARD_TICKER}",
        format_amount(&task.reward_amount, REWARD_DECIMALS, REWARD_DISPLAY_DIGITS)
    )
}

pub fn format_capacity(task: &Task) -> String {
    format!("{} / {}", task.submissions_count, task.max_workers)
}

/// Shell command a worker operator can run by hand instead of delegating
/// over HTTP
pub fn worker_command(task: &Task) -> String {
    format!(
        "python3 worker.py --task-id {} --wallet ./wallet.pem --image \"{}\" --input \"{}\"",
        task.id, task.docker_image_uri, task.input_data_uri
    )
}

/// The three delegation messages: success with the submission hash, the
/// worker's own error verbatim, or the generic connectivity notice.
pub fn delegation_message(outcome: &DelegationOutcome, worker_url: &str) -> String {
    match outcome {
        DelegationOutcome::Processed { tx_hash } => {
            format!("Task processed successfully! Tx: {tx_hash}")
        }
        DelegationOutcome::Rejected { message } => {
            format!("Error processing task: {message}")
        }
        DelegationOutcome::Unreachable => {
            format!("Failed to connect to local worker server. Is it running at {worker_url}?")
        }
    }
}
