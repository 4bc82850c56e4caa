//! Ollama backend for overthink.
//!
//! Talks to a locally running Ollama server over HTTP and converts its
//! structured JSON response into the shared analysis record. Any failure
//! here is surfaced as an error; the caller is expected to fall back to
//! the built-in engine.

pub mod client;
pub mod error;
pub mod response;

pub use client::Client;
pub use error::{OllamaError, OllamaResult};
