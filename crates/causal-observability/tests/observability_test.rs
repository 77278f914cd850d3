//! Tests for causal-observability.

use causal_core::config::ObservabilityConfig;
use causal_observability::tracing_setup::spans::names;
use causal_observability::{build_filter, init_tracing, FallbackTracker, DEFAULT_MAX_EVENTS};

// ---------------------------------------------------------------------------
// Filter and subscriber setup
// ---------------------------------------------------------------------------

#[test]
fn configured_level_builds_a_filter() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json: false,
    };
    assert!(build_filter(&config).is_ok());
}

#[test]
fn malformed_level_is_a_config_error() {
    let config = ObservabilityConfig {
        log_level: "causal_search=verbose".to_string(),
        json: false,
    };
    // The environment variable would take precedence; only check when unset.
    if std::env::var(causal_observability::LOG_ENV).is_err() {
        let err = build_filter(&config).unwrap_err();
        assert!(err.to_string().contains("config error"));
    }
}

#[test]
fn second_init_reports_an_error_instead_of_panicking() {
    let config = ObservabilityConfig::default();
    let first = init_tracing(&config);
    let second = init_tracing(&config);
    // Another test binary may already own the global subscriber, so only the
    // second call is guaranteed to fail.
    let _ = first;
    assert!(second.is_err());
}

// ---------------------------------------------------------------------------
// Spans
// ---------------------------------------------------------------------------

#[test]
fn span_macros_expand() {
    let cycle = "c-1";
    let _a = causal_observability::decision_cycle_span!(cycle);
    let _b = causal_observability::verify_claims_span!(cycle);
    let _c = causal_observability::innovation_span!(cycle, "A", "B");
    let _d = causal_observability::collaborator_span!("claim_extractor");
    assert_eq!(names::DECISION_CYCLE, "causal.decision_cycle");
}

// ---------------------------------------------------------------------------
// Fallback tracking
// ---------------------------------------------------------------------------

#[test]
fn tracker_records_and_counts_fallbacks() {
    let mut tracker = FallbackTracker::new();
    assert!(tracker.is_empty());
    tracker.record("risk_assessor", "timed out after 10ms", "risk_score=1.0");
    tracker.record("question_generator", "offline", "apology text");
    tracker.record("risk_assessor", "malformed", "risk_score=1.0");

    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.count_recent("risk_assessor", 60), 2);
    assert_eq!(tracker.count_recent("claim_extractor", 60), 0);

    let first = tracker.events().next().unwrap();
    let json = serde_json::to_string(first).unwrap();
    assert!(json.contains("risk_assessor"));
}

#[test]
fn full_tracker_evicts_the_oldest_event() {
    let mut tracker = FallbackTracker::with_max_events(2);
    tracker.record("claim_extractor", "offline", "no claims");
    tracker.record("question_generator", "offline", "apology text");
    tracker.record("risk_assessor", "offline", "risk_score=1.0");

    assert_eq!(tracker.len(), 2);
    let kept: Vec<_> = tracker.events().map(|e| e.collaborator.as_str()).collect();
    assert_eq!(kept, ["question_generator", "risk_assessor"]);
    assert_eq!(tracker.count_recent("claim_extractor", 60), 0);
}

#[test]
fn default_tracker_is_bounded() {
    let mut tracker = FallbackTracker::default();
    assert_eq!(tracker.max_events(), DEFAULT_MAX_EVENTS);
    for _ in 0..DEFAULT_MAX_EVENTS + 10 {
        tracker.record("risk_assessor", "offline", "risk_score=1.0");
    }
    assert_eq!(tracker.len(), DEFAULT_MAX_EVENTS);
}
