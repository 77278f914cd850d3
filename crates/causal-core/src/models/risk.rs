use serde::{Deserialize, Serialize};

/// Output of the risk collaborator for a candidate innovation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0.0 (safe) to 1.0 (certain harm).
    pub risk_score: f64,
    /// Narrative of the side effects.
    pub side_effects: String,
}

impl RiskAssessment {
    pub fn new(risk_score: f64, side_effects: impl Into<String>) -> Self {
        Self {
            risk_score,
            side_effects: side_effects.into(),
        }
    }

    /// Maximum-risk assessment used when the collaborator cannot be trusted.
    pub fn fallback(narrative: impl Into<String>) -> Self {
        Self::new(1.0, narrative)
    }

    /// Score is in [0.0, 1.0] and not NaN.
    pub fn is_well_formed(&self) -> bool {
        (0.0..=1.0).contains(&self.risk_score)
    }

    /// Strictly above the threshold. A score equal to the threshold does not exceed it.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.risk_score > threshold
    }
}
