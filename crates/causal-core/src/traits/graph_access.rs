use std::sync::Mutex;

use crate::errors::CausalMemoryResult;

/// Directed-edge lookup and scalar storage over the causal memory.
///
/// Engines hold no copy of graph data across calls; every read goes through here.
pub trait IGraphAccess: Send + Sync {
    /// Outgoing CAUSES edges of `node` as `(destination, weight)`. Unknown node → empty.
    fn get_edges_out(&self, node: &str) -> CausalMemoryResult<Vec<(String, f64)>>;

    fn node_exists(&self, name: &str) -> CausalMemoryResult<bool>;

    /// Upsert the edge weight.
    /// `EdgeWrite` if either endpoint is missing, `InvalidWeight` if out of [0.0, 1.0] or NaN.
    fn set_edge_weight(&self, source: &str, target: &str, weight: f64) -> CausalMemoryResult<()>;

    fn get_scalar(&self, key: &str) -> CausalMemoryResult<Option<f64>>;

    fn set_scalar(&self, key: &str, value: f64) -> CausalMemoryResult<()>;

    /// Serialises read-modify-write cycles on this graph. One gate per graph,
    /// shared by every engine that updates it.
    fn update_gate(&self) -> &Mutex<()>;

    /// Current weight of a single edge, if it exists.
    fn edge_weight(&self, source: &str, target: &str) -> CausalMemoryResult<Option<f64>> {
        Ok(self
            .get_edges_out(source)?
            .into_iter()
            .find(|(dest, _)| dest == target)
            .map(|(_, weight)| weight))
    }
}

/// A graph store that can also grow: node and link creation plus counts.
pub trait ICausalGraphStore: IGraphAccess {
    /// Create the node, or update its type tag when one is given.
    fn add_node(&self, name: &str, node_type: Option<&str>) -> CausalMemoryResult<()>;

    /// Upsert both nodes and the CAUSES edge between them.
    /// `InvalidWeight` if `weight` is outside [0.0, 1.0].
    fn add_causal_link(
        &self,
        cause: &str,
        cause_type: Option<&str>,
        effect: &str,
        effect_type: Option<&str>,
        weight: f64,
    ) -> CausalMemoryResult<()>;

    fn node_count(&self) -> CausalMemoryResult<usize>;

    fn edge_count(&self) -> CausalMemoryResult<usize>;
}
