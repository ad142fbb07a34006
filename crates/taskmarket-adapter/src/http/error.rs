/*
[INPUT]:  Error sources (HTTP, gateway, worker, serialization, signing)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the taskmarket adapter
#[derive(Error, Debug)]
pub enum MarketError {
    /// HTTP request failed (transport-level)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Gateway envelope carried an error
    #[error("gateway error: {message}")]
    Gateway { message: String },

    /// Contract query was rejected by the virtual machine
    #[error("query failed: {message}")]
    Query { message: String },

    /// Worker service answered with an error body
    #[error("worker error: {message}")]
    WorkerService { message: String },

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Wallet or signer failure
    #[error("signer error: {message}")]
    Signer { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Response shape did not match expectations
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl MarketError {
    /// True when the other side never answered, as opposed to answering with
    /// an error. The delegation flow words its user message differently for
    /// the two cases.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, MarketError::Http(_))
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_rejection_is_not_connectivity() {
        let err = MarketError::WorkerService {
            message: "oom".to_string(),
        };
        assert!(!err.is_connectivity());
    }

    #[test]
    fn gateway_error_formats_its_message() {
        let err = MarketError::Gateway {
            message: "transaction generation failed".to_string(),
        };
        assert_eq!(err.to_string(), "gateway error: transaction generation failed");
    }
}
