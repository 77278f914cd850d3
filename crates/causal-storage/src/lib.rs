//! # causal-storage
//!
//! Graph stores behind `IGraphAccess`: a petgraph-backed in-memory graph and a
//! SQLite graph with a single write connection, a read pool, and versioned migrations.

pub mod engine;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::SqliteGraph;
pub use memory::InMemoryGraph;

use causal_core::errors::{CausalMemoryError, StorageError};

/// Helper to convert a string error into a `CausalMemoryError::StorageError`.
pub fn to_storage_err(message: String) -> CausalMemoryError {
    StorageError::SqliteError { message }.into()
}
