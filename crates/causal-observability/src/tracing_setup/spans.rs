//! Span definitions per operation: decision cycle, claim verification,
//! innovation, collaborator calls.

/// Create a span for one `process` call.
#[macro_export]
macro_rules! decision_cycle_span {
    ($cycle_id:expr) => {
        tracing::info_span!("causal.decision_cycle", cycle_id = %$cycle_id)
    };
}

/// Create a span for a verify-all call.
#[macro_export]
macro_rules! verify_claims_span {
    ($cycle_id:expr) => {
        tracing::info_span!("causal.verify_claims", cycle_id = %$cycle_id)
    };
}

/// Create a span for the innovation sub-flow.
#[macro_export]
macro_rules! innovation_span {
    ($cycle_id:expr, $start:expr, $target:expr) => {
        tracing::info_span!(
            "causal.innovation",
            cycle_id = %$cycle_id,
            start = %$start,
            target = %$target
        )
    };
}

/// Create a span around one collaborator call.
#[macro_export]
macro_rules! collaborator_span {
    ($collaborator:expr) => {
        tracing::debug_span!("causal.collaborator", collaborator = %$collaborator)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DECISION_CYCLE: &str = "causal.decision_cycle";
    pub const VERIFY_CLAIMS: &str = "causal.verify_claims";
    pub const INNOVATION: &str = "causal.innovation";
    pub const COLLABORATOR: &str = "causal.collaborator";
}
