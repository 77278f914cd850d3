use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{WEIGHT_MAX, WEIGHT_MIN};
use crate::errors::GraphError;

/// Identity of a directed edge. At most one edge exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
}

impl EdgeKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

/// A directed CAUSES edge with its weight, as observed at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl CausalEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source.clone(), self.target.clone())
    }
}

impl fmt::Display for CausalEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{:.4}]-> {}", self.source, self.weight, self.target)
    }
}

/// Reject NaN and anything outside [0.0, 1.0].
pub fn validate_weight(weight: f64) -> Result<f64, GraphError> {
    if weight.is_nan() || !(WEIGHT_MIN..=WEIGHT_MAX).contains(&weight) {
        return Err(GraphError::InvalidWeight { value: weight });
    }
    Ok(weight)
}
