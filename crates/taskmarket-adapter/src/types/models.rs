/*
[INPUT]:  Decoded contract query values and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - local view model of contract state
[UPDATE]: When the contract schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decode::{amount_field, decode_status, number_field, string_field};

use super::enums::TaskStatus;

/// Read-only projection of one posted unit of work. Rebuilt from scratch on
/// every fetch; never mutated or cached locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Position in contract storage, assigned externally.
    pub id: u64,
    pub creator: String,
    pub docker_image_uri: String,
    pub input_data_uri: String,
    /// Base-unit integer string; kept as a string to avoid floating-point loss.
    pub reward_amount: String,
    pub max_workers: u64,
    /// Mutated externally as workers submit results. `submissions_count <=
    /// max_workers` is the contract's invariant, not enforced here.
    pub submissions_count: u64,
    pub status: TaskStatus,
}

impl Task {
    /// Build a task from one decoded `getTask` return value. Every field is
    /// normalized independently and tolerantly; the decoding layer's output
    /// shape varies across versions.
    pub fn from_decoded(id: u64, raw: &Value) -> Self {
        Self {
            id,
            creator: string_field(field(raw, "creator")),
            docker_image_uri: string_field(field(raw, "docker_image_uri")),
            input_data_uri: string_field(field(raw, "input_data_uri")),
            reward_amount: amount_field(field(raw, "reward_amount")),
            max_workers: number_field(field(raw, "max_workers")),
            submissions_count: number_field(field(raw, "submissions_count")),
            status: decode_status(field(raw, "status")),
        }
    }

    /// Only open tasks accept worker participation.
    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Open
    }
}

fn field<'a>(raw: &'a Value, key: &str) -> &'a Value {
    raw.get(key).unwrap_or(&Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_from_fully_populated_record() {
        let raw = json!({
            "creator": "erd1creator",
            "docker_image_uri": "ubuntu:latest",
            "input_data_uri": "https://example.com/data.json",
            "reward_amount": "1000000000000000000",
            "max_workers": 3,
            "submissions_count": 1,
            "status": { "name": "InVerification" }
        });

        let task = Task::from_decoded(4, &raw);

        assert_eq!(task.id, 4);
        assert_eq!(task.creator, "erd1creator");
        assert_eq!(task.reward_amount, "1000000000000000000");
        assert_eq!(task.max_workers, 3);
        assert_eq!(task.submissions_count, 1);
        assert_eq!(task.status, TaskStatus::InVerification);
        assert!(!task.is_open());
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let task = Task::from_decoded(0, &json!({}));

        assert_eq!(task.creator, "");
        assert_eq!(task.reward_amount, "0");
        assert_eq!(task.max_workers, 0);
        assert_eq!(task.submissions_count, 0);
        assert_eq!(task.status, TaskStatus::Open);
    }

    #[test]
    fn non_object_record_still_produces_a_task() {
        let task = Task::from_decoded(7, &json!("garbage"));

        assert_eq!(task.id, 7);
        assert_eq!(task.status, TaskStatus::Open);
    }
}
