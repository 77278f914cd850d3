//! WeightUpdateEngine: edge reinforcement and confidence updates.

use std::sync::MutexGuard;

use tracing::{debug, info};

use causal_core::config::LearningConfig;
use causal_core::constants::SYSTEM_CONFIDENCE_KEY;
use causal_core::errors::{CausalMemoryError, CausalMemoryResult, GraphError};
use causal_core::models::{CausalEdge, EdgeKey, SystemConfidence};
use causal_core::traits::IGraphAccess;

use crate::rule::apply_update;

/// Applies the update rule through the graph access interface.
///
/// Every read-modify-write runs under the graph's update gate, so concurrent
/// callers never lose an update, whether they share one engine or not.
pub struct WeightUpdateEngine {
    config: LearningConfig,
}

impl WeightUpdateEngine {
    pub fn new(config: LearningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    fn gate<'g>(&self, graph: &'g dyn IGraphAccess) -> CausalMemoryResult<MutexGuard<'g, ()>> {
        graph
            .update_gate()
            .lock()
            .map_err(|e| CausalMemoryError::ConcurrencyError(format!("update gate poisoned: {e}")))
    }

    /// Shift every edge of `path_edges` by `eta * delta`, clamped and rounded.
    ///
    /// Current weights are re-read from the graph under the gate; the weights
    /// carried in `path_edges` are not trusted. A delta of exactly zero writes
    /// nothing. If any edge has disappeared nothing is written.
    pub fn update_edges(
        &self,
        graph: &dyn IGraphAccess,
        path_edges: &[CausalEdge],
        delta: f64,
        eta: Option<f64>,
    ) -> CausalMemoryResult<Vec<EdgeKey>> {
        if delta == 0.0 || path_edges.is_empty() {
            return Ok(Vec::new());
        }
        let eta = self.checked_eta(eta, delta)?;

        let _gate = self.gate(graph)?;

        let mut current = Vec::with_capacity(path_edges.len());
        for edge in path_edges {
            let weight = graph.edge_weight(&edge.source, &edge.target)?.ok_or_else(|| {
                GraphError::edge_write(&edge.source, &edge.target, "edge no longer exists")
            })?;
            current.push(weight);
        }

        let mut updated = Vec::with_capacity(path_edges.len());
        for (edge, old) in path_edges.iter().zip(current) {
            let new = apply_update(old, delta, eta, self.config.weight_precision);
            graph.set_edge_weight(&edge.source, &edge.target, new)?;
            debug!(edge = %edge.key(), old, new, "edge weight updated");
            updated.push(edge.key());
        }
        Ok(updated)
    }

    /// Current system confidence, or the initial value when none is stored.
    pub fn confidence(&self, graph: &dyn IGraphAccess) -> CausalMemoryResult<f64> {
        let stored = graph.get_scalar(SYSTEM_CONFIDENCE_KEY)?;
        Ok(SystemConfidence::new(stored.unwrap_or(self.config.initial_confidence)).value())
    }

    /// Shift the system confidence by `eta * delta` and return the new level.
    pub fn update_confidence(
        &self,
        graph: &dyn IGraphAccess,
        delta: f64,
        eta: Option<f64>,
    ) -> CausalMemoryResult<f64> {
        let eta = self.checked_eta(eta, delta)?;

        let _gate = self.gate(graph)?;
        let level = self.confidence(graph)?;
        let new = apply_update(level, delta, eta, self.config.weight_precision);
        graph.set_scalar(SYSTEM_CONFIDENCE_KEY, new)?;
        info!(old = level, new, delta, "system confidence updated");
        Ok(new)
    }

    fn checked_eta(&self, eta: Option<f64>, delta: f64) -> CausalMemoryResult<f64> {
        let eta = eta.unwrap_or(self.config.eta);
        if !eta.is_finite() || eta < 0.0 {
            return Err(CausalMemoryError::ConfigError(format!(
                "learning rate must be a non-negative finite number, got {eta}"
            )));
        }
        if !delta.is_finite() {
            return Err(GraphError::InvalidWeight { value: delta }.into());
        }
        Ok(eta)
    }
}

impl Default for WeightUpdateEngine {
    fn default() -> Self {
        Self::new(LearningConfig::default())
    }
}
