//! Structured log events for decision outcomes.

/// A claim was verified and its path reinforced.
pub fn claim_learned(cause: &str, effect: &str, path_weight: f64, new_confidence: f64) {
    tracing::info!(
        event = "claim_learned",
        cause = %cause,
        effect = %effect,
        path_weight = path_weight,
        new_confidence = new_confidence,
        "claim verified"
    );
}

/// No trustworthy path: a question was raised instead.
pub fn knowledge_gap(cause: &str, effect: &str, new_confidence: f64) {
    tracing::info!(
        event = "knowledge_gap",
        cause = %cause,
        effect = %effect,
        new_confidence = new_confidence,
        "knowledge gap"
    );
}

pub fn innovation_found(start: &str, target: &str, hops: usize, risk_score: f64) {
    tracing::info!(
        event = "innovation_found",
        start = %start,
        target = %target,
        hops = hops,
        risk_score = risk_score,
        "innovation path accepted"
    );
}

pub fn innovation_rejected(start: &str, target: &str, risk_score: f64) {
    tracing::info!(
        event = "innovation_rejected",
        start = %start,
        target = %target,
        risk_score = risk_score,
        "innovation path rejected as too risky"
    );
}

pub fn innovation_failed(start: &str, target: &str) {
    tracing::info!(
        event = "innovation_failed",
        start = %start,
        target = %target,
        "no innovation path"
    );
}

/// A collaborator failed and its fallback was used.
pub fn collaborator_fallback(collaborator: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "collaborator_fallback",
        collaborator = %collaborator,
        failure = %failure,
        fallback = %fallback,
        "collaborator failed, using fallback"
    );
}
