// Error handling module
// Defines the benchmark's error type

use thiserror::Error;

/// Errors that can abort a benchmark run
#[derive(Error, Debug)]
pub enum BenchError {
    /// Transport-level failure; terminates the run
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request body could not be serialized
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for benchmark operations
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_error_message() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = BenchError::from(err);
        assert!(err.to_string().starts_with("Failed to serialize"));
    }
}
