use super::{CollaboratorError, GraphError, StorageError};

/// Top-level error type for the causal memory.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum CausalMemoryError {
    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("collaborator error: {0}")]
    CollaboratorError(#[from] CollaboratorError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("config error: {0}")]
    ConfigError(String),
}

/// Convenience type alias.
pub type CausalMemoryResult<T> = Result<T, CausalMemoryError>;
