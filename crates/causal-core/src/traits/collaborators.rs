use crate::errors::CollaboratorError;
use crate::models::{CausalEdge, Claim, RiskAssessment};

/// Turns free text into causal claims, in extraction order.
pub trait IClaimExtractor: Send + Sync {
    fn extract_claims(&self, text: &str) -> Result<Vec<Claim>, CollaboratorError>;
}

/// Produces an exploratory question for an unverified cause/effect pair.
pub trait IQuestionGenerator: Send + Sync {
    fn generate_question(
        &self,
        cause: &str,
        effect: &str,
        threshold: f64,
    ) -> Result<String, CollaboratorError>;
}

/// Scores the side effects of taking an unconventional causal route.
pub trait IRiskAssessor: Send + Sync {
    fn assess_risk(&self, edges: &[CausalEdge]) -> Result<RiskAssessment, CollaboratorError>;
}
