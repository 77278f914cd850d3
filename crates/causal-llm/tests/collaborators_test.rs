//! Collaborators over a scripted chat backend.

use std::sync::{Arc, Mutex};

use causal_core::errors::CollaboratorError;
use causal_core::models::{CausalEdge, Claim, ClaimType, RiskAssessment};
use causal_core::traits::{IClaimExtractor, IQuestionGenerator, IRiskAssessor};
use causal_llm::prompts::QUESTION_PREFIX;
use causal_llm::{
    ChatBackend, ChatRequest, LlmClaimExtractor, LlmQuestionGenerator, LlmRiskAssessor,
};

/// Replies with a fixed string and keeps every request it saw.
struct Scripted {
    reply: Result<String, CollaboratorError>,
    seen: Mutex<Vec<(String, ChatRequest)>>,
}

impl Scripted {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err(CollaboratorError::failed("backend", "HTTP error: connection refused")),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn last(&self) -> (String, ChatRequest) {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

impl ChatBackend for Scripted {
    fn complete(
        &self,
        collaborator: &str,
        request: &ChatRequest,
    ) -> Result<String, CollaboratorError> {
        self.seen
            .lock()
            .unwrap()
            .push((collaborator.to_string(), request.clone()));
        self.reply.clone()
    }
}

#[test]
fn extractor_sends_json_request_and_parses_claims() {
    let backend = Scripted::replying(
        r#"{"causal_claims": [{"cause": "Memory_Leak", "effect": "Server_Crash", "claim_type": "causes"}]}"#,
    );
    let extractor = LlmClaimExtractor::new(backend.clone());

    let claims = extractor
        .extract_claims("A memory leak crashed the server")
        .unwrap();

    assert_eq!(claims, vec![Claim::new("Memory_Leak", "Server_Crash")]);
    assert_eq!(claims[0].claim_type, ClaimType::Causes);
    let (collaborator, request) = backend.last();
    assert_eq!(collaborator, "claim_extractor");
    assert!(request.json_mode);
    assert!(request.messages[1].content.contains("A memory leak crashed the server"));
}

#[test]
fn extractor_reports_unparseable_reply_as_malformed() {
    let extractor = LlmClaimExtractor::new(Scripted::replying("I found no claims."));
    let err = extractor.extract_claims("text").unwrap_err();
    assert!(matches!(err, CollaboratorError::Malformed { .. }));
    assert_eq!(err.collaborator(), "claim_extractor");
}

#[test]
fn extractor_passes_backend_failures_through() {
    let extractor = LlmClaimExtractor::new(Scripted::failing());
    assert!(matches!(
        extractor.extract_claims("text").unwrap_err(),
        CollaboratorError::Failed { .. }
    ));
}

#[test]
fn question_is_prefixed_and_trimmed() {
    let backend = Scripted::replying("  Which queue sits between the two?\n");
    let generator = LlmQuestionGenerator::new(backend.clone());

    let question = generator
        .generate_question("increase_thread_priority", "better_performance", 0.5)
        .unwrap();

    assert_eq!(
        question,
        format!("{QUESTION_PREFIX}Which queue sits between the two?")
    );
    let (_, request) = backend.last();
    assert!(!request.json_mode);
    assert!(request.messages[1].content.contains("increase_thread_priority"));
}

#[test]
fn blank_question_is_malformed() {
    let generator = LlmQuestionGenerator::new(Scripted::replying("   "));
    assert!(matches!(
        generator.generate_question("a", "b", 0.5).unwrap_err(),
        CollaboratorError::Malformed { .. }
    ));
}

#[test]
fn risk_assessor_describes_the_path() {
    let backend = Scripted::replying(r#"{"risk_score": 0.3, "side_effects": "untested code ships"}"#);
    let assessor = LlmRiskAssessor::new(backend.clone());
    let path = vec![
        CausalEdge::new("Feature_Request", "Feature_Flag", 0.5),
        CausalEdge::new("Feature_Flag", "Deployment", 0.9),
    ];

    let risk = assessor.assess_risk(&path).unwrap();

    assert_eq!(risk, RiskAssessment::new(0.3, "untested code ships"));
    let (collaborator, request) = backend.last();
    assert_eq!(collaborator, "risk_assessor");
    assert!(request.json_mode);
    assert!(request.messages[1]
        .content
        .contains("Feature_Request -[0.50]-> Feature_Flag -[0.90]-> Deployment"));
}

#[test]
fn risk_reply_without_score_is_malformed() {
    let assessor = LlmRiskAssessor::new(Scripted::replying(r#"{"side_effects": "?"}"#));
    let err = assessor
        .assess_risk(&[CausalEdge::new("A", "B", 0.5)])
        .unwrap_err();
    assert!(matches!(err, CollaboratorError::Malformed { .. }));
}
