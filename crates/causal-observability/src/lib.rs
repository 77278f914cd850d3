//! # causal-observability
//!
//! Tracing subscriber setup, named spans per decision cycle, structured
//! events for outcomes, and a tracker for collaborator fallbacks.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{FallbackEvent, FallbackTracker, DEFAULT_MAX_EVENTS};
pub use tracing_setup::{build_filter, init_tracing, LOG_ENV};
