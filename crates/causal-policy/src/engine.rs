//! DecisionPolicy: one claim at a time, plus the independent innovation sub-flow.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{debug, info};
use uuid::Uuid;

use causal_core::config::{CausalMemoryConfig, PolicyConfig};
use causal_core::errors::{CausalMemoryError, CausalMemoryResult, CollaboratorError};
use causal_core::models::{
    CausalEdge, Claim, DecisionOutcome, InnovationOutcome, RiskAssessment, VerifiedClaim,
};
use causal_core::traits::IGraphAccess;
use causal_learning::WeightUpdateEngine;
use causal_observability::tracing_setup::events;
use causal_observability::{
    collaborator_span, decision_cycle_span, innovation_span, verify_claims_span, FallbackEvent,
    FallbackTracker,
};
use causal_search::PathSearchEngine;

use crate::bounded::call_bounded;
use crate::collaborators::{names, Collaborators};

/// Orchestrates verification, learning, and escalation over a shared graph.
///
/// Collaborator failures never escape: each has a fallback. Graph and storage
/// errors do escape, and abort the cycle before confidence is touched.
pub struct DecisionPolicy {
    graph: Arc<dyn IGraphAccess>,
    search: PathSearchEngine,
    learning: WeightUpdateEngine,
    collaborators: Collaborators,
    config: PolicyConfig,
    fallbacks: Mutex<FallbackTracker>,
}

impl DecisionPolicy {
    pub fn new(
        graph: Arc<dyn IGraphAccess>,
        collaborators: Collaborators,
        config: &CausalMemoryConfig,
    ) -> Self {
        Self {
            graph,
            search: PathSearchEngine::new(config.search.clone()),
            learning: WeightUpdateEngine::new(config.learning.clone()),
            collaborators,
            config: config.policy.clone(),
            fallbacks: Mutex::new(FallbackTracker::new()),
        }
    }

    pub fn graph(&self) -> &Arc<dyn IGraphAccess> {
        &self.graph
    }

    /// Run one decision cycle over `text` with the caller's outcome `feedback`.
    pub fn process(&self, text: &str, feedback: f64) -> CausalMemoryResult<DecisionOutcome> {
        self.process_with_threshold(text, feedback, None)
    }

    /// `process` with a caller-chosen trust threshold instead of the configured one.
    pub fn process_with_threshold(
        &self,
        text: &str,
        feedback: f64,
        threshold: Option<f64>,
    ) -> CausalMemoryResult<DecisionOutcome> {
        let cycle_id = Uuid::new_v4();
        let span = decision_cycle_span!(cycle_id);
        let _guard = span.enter();

        let mut claims = self.extract_claims(text).into_iter();
        let Some(claim) = claims.next() else {
            info!("no claims extracted");
            return Ok(DecisionOutcome::NoClaims);
        };
        let ignored = claims.count();
        if ignored > 0 {
            debug!(ignored, "only the first claim is processed");
        }

        let graph = self.graph.as_ref();
        let threshold = threshold.unwrap_or(self.search.config.trust_threshold);
        let learning = self.learning.config();

        match self
            .search
            .verify(graph, &claim.cause, &claim.effect, Some(threshold))?
        {
            Some(path) => {
                let updated_edges = self
                    .learning
                    .update_edges(graph, path.edges(), feedback, None)?;
                let new_confidence = self.learning.update_confidence(
                    graph,
                    learning.confidence_success_delta,
                    None,
                )?;
                let path_weight = path.path_weight();
                events::claim_learned(&claim.cause, &claim.effect, path_weight, new_confidence);
                Ok(DecisionOutcome::Learned {
                    claim,
                    path,
                    path_weight,
                    updated_edges,
                    new_confidence,
                })
            }
            None => {
                let new_confidence = self.learning.update_confidence(
                    graph,
                    learning.confidence_failure_delta,
                    None,
                )?;
                let question = self.generate_question(&claim, threshold);
                events::knowledge_gap(&claim.cause, &claim.effect, new_confidence);
                Ok(DecisionOutcome::Questioned {
                    claim,
                    question,
                    new_confidence,
                })
            }
        }
    }

    /// Extract every claim from `text` and verify each one. Nothing is learned.
    pub fn verify_claims(&self, text: &str) -> CausalMemoryResult<Vec<VerifiedClaim>> {
        let cycle_id = Uuid::new_v4();
        let span = verify_claims_span!(cycle_id);
        let _guard = span.enter();

        let graph = self.graph.as_ref();
        self.extract_claims(text)
            .into_iter()
            .map(|claim| -> CausalMemoryResult<VerifiedClaim> {
                let path = self.search.verify(graph, &claim.cause, &claim.effect, None)?;
                Ok(VerifiedClaim {
                    path_weight: path.map(|p| p.path_weight()),
                    claim,
                })
            })
            .collect()
    }

    /// Look for a route from `start` to `target` that avoids every blocking
    /// constraint, then gate it on risk.
    pub fn attempt_innovation(
        &self,
        start: &str,
        target: &str,
    ) -> CausalMemoryResult<InnovationOutcome> {
        let cycle_id = Uuid::new_v4();
        let span = innovation_span!(cycle_id, start, target);
        let _guard = span.enter();

        let found = self.search.innovate(
            self.graph.as_ref(),
            start,
            target,
            self.config.blocking_constraints.iter().cloned(),
        )?;
        let Some(path) = found else {
            events::innovation_failed(start, target);
            return Ok(InnovationOutcome::Failed);
        };

        let risk = self.assess_risk(path.edges().to_vec());
        let threshold = self.config.risk_reject_threshold;
        if risk.exceeds(threshold) {
            events::innovation_rejected(start, target, risk.risk_score);
            let message = format!(
                "Route from {start} to {target} rejected: risk {:.2} exceeds {:.2}. {}",
                risk.risk_score, threshold, risk.side_effects
            );
            return Ok(InnovationOutcome::Rejected { risk, message });
        }

        events::innovation_found(start, target, path.length(), risk.risk_score);
        Ok(InnovationOutcome::Found { path, risk })
    }

    /// Current system confidence (the initial value if none is stored yet).
    pub fn system_confidence(&self) -> CausalMemoryResult<f64> {
        self.learning.confidence(self.graph.as_ref())
    }

    /// The most recent collaborator fallbacks, oldest first.
    pub fn fallback_events(&self) -> CausalMemoryResult<Vec<FallbackEvent>> {
        let tracker = self.tracker()?;
        Ok(tracker.events().cloned().collect())
    }

    /// Fallbacks of one collaborator within the last `window_secs` seconds.
    pub fn recent_fallbacks(&self, collaborator: &str, window_secs: i64) -> CausalMemoryResult<usize> {
        Ok(self.tracker()?.count_recent(collaborator, window_secs))
    }

    fn tracker(&self) -> CausalMemoryResult<MutexGuard<'_, FallbackTracker>> {
        self.fallbacks
            .lock()
            .map_err(|e| CausalMemoryError::ConcurrencyError(e.to_string()))
    }

    fn timeout(&self) -> Option<Duration> {
        self.config.collaborator_timeout_ms.map(Duration::from_millis)
    }

    fn record_fallback(&self, collaborator: &str, failure: &CollaboratorError, fallback: &str) {
        match self.fallbacks.lock() {
            Ok(mut tracker) => tracker.record(collaborator, &failure.to_string(), fallback),
            Err(_) => events::collaborator_fallback(collaborator, &failure.to_string(), fallback),
        }
    }

    /// Claims in extraction order; empty when extraction fails.
    fn extract_claims(&self, text: &str) -> Vec<Claim> {
        let _span = collaborator_span!(names::CLAIM_EXTRACTOR).entered();
        let extractor = Arc::clone(&self.collaborators.extractor);
        let text = text.to_string();
        match call_bounded(names::CLAIM_EXTRACTOR, self.timeout(), move || {
            extractor.extract_claims(&text)
        }) {
            Ok(claims) => {
                debug!(count = claims.len(), "claims extracted");
                claims
            }
            Err(e) => {
                self.record_fallback(names::CLAIM_EXTRACTOR, &e, "no claims");
                Vec::new()
            }
        }
    }

    /// The generated question, or the configured apology when generation fails.
    fn generate_question(&self, claim: &Claim, threshold: f64) -> String {
        let _span = collaborator_span!(names::QUESTION_GENERATOR).entered();
        let generator = Arc::clone(&self.collaborators.question_generator);
        let (cause, effect) = (claim.cause.clone(), claim.effect.clone());
        let result = call_bounded(names::QUESTION_GENERATOR, self.timeout(), move || {
            generator.generate_question(&cause, &effect, threshold)
        })
        .and_then(|question| {
            if question.trim().is_empty() {
                Err(CollaboratorError::malformed(
                    names::QUESTION_GENERATOR,
                    "empty question",
                ))
            } else {
                Ok(question)
            }
        });

        match result {
            Ok(question) => question,
            Err(e) => {
                self.record_fallback(names::QUESTION_GENERATOR, &e, "apology text");
                self.config.question_fallback.clone()
            }
        }
    }

    /// The collaborator's assessment, or maximum risk when it fails or returns
    /// a score outside [0.0, 1.0].
    fn assess_risk(&self, edges: Vec<CausalEdge>) -> RiskAssessment {
        let _span = collaborator_span!(names::RISK_ASSESSOR).entered();
        let assessor = Arc::clone(&self.collaborators.risk_assessor);
        let result = call_bounded(names::RISK_ASSESSOR, self.timeout(), move || {
            assessor.assess_risk(&edges)
        })
        .and_then(|risk| {
            if risk.is_well_formed() {
                Ok(risk)
            } else {
                Err(CollaboratorError::malformed(
                    names::RISK_ASSESSOR,
                    format!("risk score {} outside [0.0, 1.0]", risk.risk_score),
                ))
            }
        });

        match result {
            Ok(risk) => risk,
            Err(e) => {
                self.record_fallback(names::RISK_ASSESSOR, &e, "maximum risk");
                RiskAssessment::fallback(self.config.risk_fallback_narrative.clone())
            }
        }
    }
}
