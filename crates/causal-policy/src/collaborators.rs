//! The three external collaborators the policy consults.

use std::sync::Arc;

use causal_core::traits::{IClaimExtractor, IQuestionGenerator, IRiskAssessor};

/// Shared handles so a timed-out call can keep running on its own thread.
#[derive(Clone)]
pub struct Collaborators {
    pub extractor: Arc<dyn IClaimExtractor>,
    pub question_generator: Arc<dyn IQuestionGenerator>,
    pub risk_assessor: Arc<dyn IRiskAssessor>,
}

impl Collaborators {
    pub fn new(
        extractor: Arc<dyn IClaimExtractor>,
        question_generator: Arc<dyn IQuestionGenerator>,
        risk_assessor: Arc<dyn IRiskAssessor>,
    ) -> Self {
        Self {
            extractor,
            question_generator,
            risk_assessor,
        }
    }
}

/// Names used in logs, errors, and fallback records.
pub mod names {
    pub const CLAIM_EXTRACTOR: &str = "claim_extractor";
    pub const QUESTION_GENERATOR: &str = "question_generator";
    pub const RISK_ASSESSOR: &str = "risk_assessor";
}
