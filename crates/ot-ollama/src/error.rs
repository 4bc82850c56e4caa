//! Error types for the Ollama backend.

use thiserror::Error;

/// Result type for Ollama operations.
pub type OllamaResult<T> = Result<T, OllamaError>;

/// Errors that can occur while querying an Ollama model.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// The server could not be reached, the request timed out, or the
    /// reply body could not be read.
    #[error("cannot reach Ollama: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("ollama model {model:?} failed ({status}): {detail}")]
    ModelFailed {
        /// The model that was queried.
        model: String,
        /// HTTP status returned by the server.
        status: u16,
        /// Response body, trimmed.
        detail: String,
    },

    /// The model produced no output.
    #[error("ollama model {model:?} produced empty output")]
    EmptyResponse {
        /// The model that was queried.
        model: String,
    },

    /// The model's output did not match the structured analysis contract.
    #[error("ollama returned a malformed analysis: {0}")]
    Malformed(#[from] serde_json::Error),
}
