//! Collaborator trait implementations over a [`ChatBackend`].

use std::sync::Arc;

use tracing::debug;

use causal_core::errors::CollaboratorError;
use causal_core::models::{CausalEdge, Claim, RiskAssessment};
use causal_core::traits::{IClaimExtractor, IQuestionGenerator, IRiskAssessor};

use crate::client::{ChatBackend, ChatRequest};
use crate::parse::{parse_claims, parse_risk};
use crate::prompts;

const CLAIM_EXTRACTOR: &str = "claim_extractor";
const QUESTION_GENERATOR: &str = "question_generator";
const RISK_ASSESSOR: &str = "risk_assessor";

/// Extracts claims with a JSON-mode completion.
pub struct LlmClaimExtractor {
    backend: Arc<dyn ChatBackend>,
}

impl LlmClaimExtractor {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }
}

impl IClaimExtractor for LlmClaimExtractor {
    fn extract_claims(&self, text: &str) -> Result<Vec<Claim>, CollaboratorError> {
        let request =
            ChatRequest::new(prompts::EXTRACTION_SYSTEM, prompts::extraction_user(text)).json();
        let reply = self.backend.complete(CLAIM_EXTRACTOR, &request)?;
        let claims =
            parse_claims(&reply).map_err(|e| CollaboratorError::malformed(CLAIM_EXTRACTOR, e))?;
        debug!(count = claims.len(), "claims parsed");
        Ok(claims)
    }
}

/// Asks the model for the missing link between a cause and an effect.
pub struct LlmQuestionGenerator {
    backend: Arc<dyn ChatBackend>,
}

impl LlmQuestionGenerator {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }
}

impl IQuestionGenerator for LlmQuestionGenerator {
    fn generate_question(
        &self,
        cause: &str,
        effect: &str,
        threshold: f64,
    ) -> Result<String, CollaboratorError> {
        let request = ChatRequest::new(
            prompts::QUESTION_SYSTEM,
            prompts::question_user(cause, effect, threshold),
        );
        let reply = self.backend.complete(QUESTION_GENERATOR, &request)?;
        let question = reply.trim();
        if question.is_empty() {
            return Err(CollaboratorError::malformed(QUESTION_GENERATOR, "empty reply"));
        }
        Ok(format!("{}{question}", prompts::QUESTION_PREFIX))
    }
}

/// Scores a candidate innovation path.
pub struct LlmRiskAssessor {
    backend: Arc<dyn ChatBackend>,
}

impl LlmRiskAssessor {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }
}

impl IRiskAssessor for LlmRiskAssessor {
    fn assess_risk(&self, path: &[CausalEdge]) -> Result<RiskAssessment, CollaboratorError> {
        let request = ChatRequest::new(prompts::RISK_SYSTEM, prompts::risk_user(path)).json();
        let reply = self.backend.complete(RISK_ASSESSOR, &request)?;
        parse_risk(&reply).map_err(|e| CollaboratorError::malformed(RISK_ASSESSOR, e))
    }
}
