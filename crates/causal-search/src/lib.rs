//! # causal-search
//!
//! Finds the best simple causal path between two named entities under a
//! constraint set: hop bound, per-edge floor, forbidden nodes, and an optional
//! acceptance threshold on the selected path.

pub mod engine;
pub mod options;
mod ranking;

pub use engine::{search, PathSearchEngine};
pub use options::{PathOrdering, SearchOptions};
