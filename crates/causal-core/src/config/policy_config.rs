use serde::{Deserialize, Serialize};

use super::defaults;

/// Decision policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Innovation paths scoring strictly above this are rejected.
    pub risk_reject_threshold: f64,
    /// Nodes that represent normally-mandatory checkpoints. Innovation routes around them.
    /// Empty by default, in which case innovation forbids nothing and returns the
    /// best unconstrained route. `test-fixtures/config/innovation.toml` sets one up.
    pub blocking_constraints: Vec<String>,
    /// Upper bound on a single collaborator call. `None` waits indefinitely.
    pub collaborator_timeout_ms: Option<u64>,
    /// Text returned when question generation fails.
    pub question_fallback: String,
    /// Narrative attached to the cautious risk fallback.
    pub risk_fallback_narrative: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            risk_reject_threshold: defaults::DEFAULT_RISK_REJECT_THRESHOLD,
            blocking_constraints: Vec::new(),
            collaborator_timeout_ms: Some(defaults::DEFAULT_COLLABORATOR_TIMEOUT_MS),
            question_fallback: defaults::DEFAULT_QUESTION_FALLBACK.to_string(),
            risk_fallback_narrative: defaults::DEFAULT_RISK_FALLBACK_NARRATIVE.to_string(),
        }
    }
}
