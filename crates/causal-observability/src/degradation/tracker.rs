//! Record every collaborator fallback: collaborator, failure, fallback used, timestamp.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackEvent {
    pub collaborator: String,
    pub failure: String,
    pub fallback: String,
    pub timestamp: DateTime<Utc>,
}

/// Events kept by a default tracker before the oldest are evicted.
pub const DEFAULT_MAX_EVENTS: usize = 256;

/// Tracks the most recent fallbacks for reporting.
#[derive(Debug, Clone)]
pub struct FallbackTracker {
    events: VecDeque<FallbackEvent>,
    max_events: usize,
}

impl FallbackTracker {
    pub fn new() -> Self {
        Self::with_max_events(DEFAULT_MAX_EVENTS)
    }

    /// A tracker holding at most `max_events` (at least one).
    pub fn with_max_events(max_events: usize) -> Self {
        let max_events = max_events.max(1);
        Self {
            events: VecDeque::with_capacity(max_events.min(DEFAULT_MAX_EVENTS)),
            max_events,
        }
    }

    /// Record a fallback and emit the matching warning event.
    /// The oldest event is dropped once the tracker is full.
    pub fn record(&mut self, collaborator: &str, failure: &str, fallback: &str) {
        crate::tracing_setup::events::collaborator_fallback(collaborator, failure, fallback);
        if self.events.len() == self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(FallbackEvent {
            collaborator: collaborator.to_string(),
            failure: failure.to_string(),
            fallback: fallback.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &FallbackEvent> + '_ {
        self.events.iter()
    }

    pub fn max_events(&self) -> usize {
        self.max_events
    }

    /// Count events in the last N seconds for a given collaborator.
    pub fn count_recent(&self, collaborator: &str, window_secs: i64) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|e| e.collaborator == collaborator && e.timestamp > cutoff)
            .count()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for FallbackTracker {
    fn default() -> Self {
        Self::new()
    }
}
