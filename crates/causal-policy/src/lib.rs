//! # causal-policy
//!
//! Composes path search, weight learning, and the external collaborators into
//! the decision cycle (verify → learn or question) and the innovation sub-flow
//! (innovate → risk-gate).

mod bounded;
pub mod collaborators;
pub mod engine;

pub use collaborators::Collaborators;
pub use engine::DecisionPolicy;
