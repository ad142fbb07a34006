/*
[INPUT]:  Contract ABI enum definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for contract state
[UPDATE]: When the contract schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a posted compute task. Owned by the contract; this crate
/// only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    InVerification,
    Completed,
    Failed,
}

impl TaskStatus {
    /// Variant order matches the contract's enum declaration, which is what
    /// ordinal-encoded responses index into.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Open,
        TaskStatus::InVerification,
        TaskStatus::Completed,
        TaskStatus::Failed,
    ];

    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Case-insensitive match against the four variant names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::InVerification => "InVerification",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Open
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
