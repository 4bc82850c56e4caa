//! Error types for the analysis engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while assembling an analysis.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A candidate pool was empty. Pools are compiled-in configuration,
    /// so this indicates a build defect, not a runtime condition.
    #[error("cannot select from an empty candidate pool")]
    EmptyPool,
}
