mod collaborators;
mod graph_access;

pub use collaborators::{IClaimExtractor, IQuestionGenerator, IRiskAssessor};
pub use graph_access::{ICausalGraphStore, IGraphAccess};
