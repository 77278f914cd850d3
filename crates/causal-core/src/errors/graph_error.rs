/// Causal graph errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The edge cannot be written: an endpoint is missing, or the edge being
    /// updated no longer exists.
    #[error("cannot write edge {source_name} -> {target_name}: {reason}")]
    EdgeWrite {
        source_name: String,
        target_name: String,
        reason: String,
    },

    #[error("weight {value} is outside [0.0, 1.0]")]
    InvalidWeight { value: f64 },

    #[error("invalid search options: {reason}")]
    InvalidSearchOptions { reason: String },

    #[error("invalid causal path: {reason}")]
    InvalidPath { reason: String },
}

impl GraphError {
    pub fn edge_write(source: &str, target: &str, reason: impl Into<String>) -> Self {
        Self::EdgeWrite {
            source_name: source.to_string(),
            target_name: target.to_string(),
            reason: reason.into(),
        }
    }
}
