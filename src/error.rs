//! Errors raised by calls to the inference engine.

use thiserror::Error;

/// A single failed chat exchange with the inference engine
#[derive(Error, Debug)]
pub enum InferenceError {
    /// The request never produced an HTTP response (connection refused, DNS, timeout)
    #[error("Failed to send request to Ollama: {0}")]
    Request(#[from] reqwest::Error),

    /// The engine answered with a non-success status
    #[error("Ollama API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, read best-effort
        body: String,
    },

    /// The engine answered 2xx but reported an error in the body
    #[error("Ollama model error: {0}")]
    Model(String),

    /// The body was not a chat response
    #[error("Failed to parse Ollama chat response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = InferenceError::Api {
            status: 503,
            body: "model is loading".to_string(),
        };
        assert_eq!(err.to_string(), "Ollama API error (503): model is loading");
    }

    #[test]
    fn test_model_error_display() {
        let err = InferenceError::Model("model 'qwen3:0.6b' not found".to_string());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_decode_error_display() {
        let err = InferenceError::Decode("expected value at line 1 column 1".to_string());
        assert!(err.to_string().starts_with("Failed to parse Ollama chat response"));
    }
}
