use serde::{Deserialize, Serialize};

use super::defaults;

/// Path search configuration for the Verify and Innovate modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Trust threshold (tau): per-edge floor and aggregate bound in Verify mode.
    pub trust_threshold: f64,
    /// Maximum path length in Verify mode.
    pub verify_max_hops: usize,
    /// Maximum path length in Innovate mode.
    pub innovate_max_hops: usize,
    /// Per-edge floor in Innovate mode.
    pub innovate_min_edge_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trust_threshold: defaults::DEFAULT_TRUST_THRESHOLD,
            verify_max_hops: defaults::DEFAULT_VERIFY_MAX_HOPS,
            innovate_max_hops: defaults::DEFAULT_INNOVATE_MAX_HOPS,
            innovate_min_edge_weight: defaults::DEFAULT_INNOVATE_MIN_EDGE_WEIGHT,
        }
    }
}
