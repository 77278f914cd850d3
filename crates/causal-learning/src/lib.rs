//! # causal-learning
//!
//! The online update rule for edge weights and the system confidence scalar.
//! All read-modify-write cycles go through the update gate of the graph they touch.

pub mod engine;
pub mod rule;

pub use engine::WeightUpdateEngine;
pub use rule::{apply_update, round_to};
