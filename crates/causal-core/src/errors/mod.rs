mod causal_memory_error;
mod collaborator_error;
mod graph_error;
mod storage_error;

pub use causal_memory_error::{CausalMemoryError, CausalMemoryResult};
pub use collaborator_error::CollaboratorError;
pub use graph_error::GraphError;
pub use storage_error::StorageError;
