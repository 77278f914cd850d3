use serde::{Deserialize, Serialize};

use super::{CausalPath, Claim, EdgeKey, RiskAssessment};

/// Result of one decision cycle over a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DecisionOutcome {
    /// The first claim was verified. Edges were reinforced and confidence went up.
    Learned {
        claim: Claim,
        path: CausalPath,
        path_weight: f64,
        updated_edges: Vec<EdgeKey>,
        new_confidence: f64,
    },
    /// No trustworthy path. Confidence went down and a question was generated.
    Questioned {
        claim: Claim,
        question: String,
        new_confidence: f64,
    },
    /// Nothing to verify.
    NoClaims,
}

impl DecisionOutcome {
    /// Confidence after the cycle, absent when the cycle did not touch it.
    pub fn new_confidence(&self) -> Option<f64> {
        match self {
            Self::Learned { new_confidence, .. } | Self::Questioned { new_confidence, .. } => {
                Some(*new_confidence)
            }
            Self::NoClaims => None,
        }
    }
}

/// Result of the innovation sub-flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InnovationOutcome {
    Found {
        path: CausalPath,
        risk: RiskAssessment,
    },
    /// A route exists but is too risky. The route itself is withheld.
    Rejected {
        risk: RiskAssessment,
        message: String,
    },
    Failed,
}
