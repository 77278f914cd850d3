//! # causal-core
//!
//! Foundation crate for the causal memory.
//! Defines the graph model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CausalMemoryConfig;
pub use errors::{CausalMemoryError, CausalMemoryResult};
pub use models::{
    CausalEdge, CausalNode, CausalPath, Claim, ClaimType, DecisionOutcome, EdgeKey,
    InnovationOutcome, RiskAssessment, SystemConfidence, VerifiedClaim,
};
