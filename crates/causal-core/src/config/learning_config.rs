use serde::{Deserialize, Serialize};

use super::defaults;

/// Weight and confidence update configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Learning rate (eta), shared by edge and confidence updates.
    pub eta: f64,
    /// Confidence assumed when none has been stored yet.
    pub initial_confidence: f64,
    /// Confidence delta applied after a successful verification.
    pub confidence_success_delta: f64,
    /// Confidence delta applied after a failed verification.
    pub confidence_failure_delta: f64,
    /// Decimal digits kept when persisting weights and confidence.
    pub weight_precision: u32,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            eta: defaults::DEFAULT_LEARNING_RATE,
            initial_confidence: defaults::DEFAULT_INITIAL_CONFIDENCE,
            confidence_success_delta: defaults::DEFAULT_CONFIDENCE_SUCCESS_DELTA,
            confidence_failure_delta: defaults::DEFAULT_CONFIDENCE_FAILURE_DELTA,
            weight_precision: defaults::DEFAULT_WEIGHT_PRECISION,
        }
    }
}
