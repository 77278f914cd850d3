//! petgraph::StableGraph store with name-indexed nodes, behind an `RwLock`.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Directed;

use causal_core::errors::{CausalMemoryError, CausalMemoryResult, GraphError};
use causal_core::models::{validate_weight, CausalNode};
use causal_core::traits::{ICausalGraphStore, IGraphAccess};

/// Edge weight is the CAUSES strength in [0.0, 1.0].
pub type CausalStableGraph = StableGraph<CausalNode, f64, Directed>;

/// Wrapper providing name-indexed access to the causal graph.
#[derive(Default)]
pub struct IndexedGraph {
    pub graph: CausalStableGraph,
    /// Map from node name → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a node. A given type tag replaces the stored one.
    pub fn ensure_node(&mut self, name: &str, node_type: Option<&str>) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            if let (Some(tag), Some(node)) = (node_type, self.graph.node_weight_mut(idx)) {
                node.node_type = Some(tag.to_string());
            }
            return idx;
        }
        let node = CausalNode {
            name: name.to_string(),
            node_type: node_type.map(str::to_string),
        };
        let idx = self.graph.add_node(node);
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    /// Set the weight of an existing edge or add it.
    pub fn upsert_edge(&mut self, source: NodeIndex, target: NodeIndex, weight: f64) {
        match self.graph.find_edge(source, target) {
            Some(edge) => {
                if let Some(w) = self.graph.edge_weight_mut(edge) {
                    *w = weight;
                }
            }
            None => {
                self.graph.add_edge(source, target, weight);
            }
        }
    }
}

/// In-process causal memory. Cheap to create, nothing persists.
#[derive(Default)]
pub struct InMemoryGraph {
    graph: RwLock<IndexedGraph>,
    scalars: RwLock<HashMap<String, f64>>,
    update_gate: Mutex<()>,
}

impl InMemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CausalMemoryResult<RwLockReadGuard<'_, IndexedGraph>> {
        self.graph
            .read()
            .map_err(|e| CausalMemoryError::ConcurrencyError(e.to_string()))
    }

    fn write(&self) -> CausalMemoryResult<RwLockWriteGuard<'_, IndexedGraph>> {
        self.graph
            .write()
            .map_err(|e| CausalMemoryError::ConcurrencyError(e.to_string()))
    }
}

impl IGraphAccess for InMemoryGraph {
    fn get_edges_out(&self, node: &str) -> CausalMemoryResult<Vec<(String, f64)>> {
        let graph = self.read()?;
        let Some(idx) = graph.get_node(node) else {
            return Ok(Vec::new());
        };
        let mut edges: Vec<(String, f64)> = graph
            .graph
            .edges(idx)
            .filter_map(|edge| {
                graph
                    .graph
                    .node_weight(edge.target())
                    .map(|n| (n.name.clone(), *edge.weight()))
            })
            .collect();
        edges.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(edges)
    }

    fn node_exists(&self, name: &str) -> CausalMemoryResult<bool> {
        Ok(self.read()?.get_node(name).is_some())
    }

    fn set_edge_weight(&self, source: &str, target: &str, weight: f64) -> CausalMemoryResult<()> {
        validate_weight(weight)?;
        let mut graph = self.write()?;
        let src = graph
            .get_node(source)
            .ok_or_else(|| GraphError::edge_write(source, target, "source node does not exist"))?;
        let tgt = graph
            .get_node(target)
            .ok_or_else(|| GraphError::edge_write(source, target, "target node does not exist"))?;
        graph.upsert_edge(src, tgt, weight);
        Ok(())
    }

    fn get_scalar(&self, key: &str) -> CausalMemoryResult<Option<f64>> {
        let scalars = self
            .scalars
            .read()
            .map_err(|e| CausalMemoryError::ConcurrencyError(e.to_string()))?;
        Ok(scalars.get(key).copied())
    }

    fn set_scalar(&self, key: &str, value: f64) -> CausalMemoryResult<()> {
        let mut scalars = self
            .scalars
            .write()
            .map_err(|e| CausalMemoryError::ConcurrencyError(e.to_string()))?;
        scalars.insert(key.to_string(), value);
        Ok(())
    }

    fn edge_weight(&self, source: &str, target: &str) -> CausalMemoryResult<Option<f64>> {
        let graph = self.read()?;
        let (Some(src), Some(tgt)) = (graph.get_node(source), graph.get_node(target)) else {
            return Ok(None);
        };
        Ok(graph
            .graph
            .find_edge(src, tgt)
            .and_then(|e| graph.graph.edge_weight(e).copied()))
    }

    fn update_gate(&self) -> &Mutex<()> {
        &self.update_gate
    }
}

impl ICausalGraphStore for InMemoryGraph {
    fn add_node(&self, name: &str, node_type: Option<&str>) -> CausalMemoryResult<()> {
        self.write()?.ensure_node(name, node_type);
        Ok(())
    }

    fn add_causal_link(
        &self,
        cause: &str,
        cause_type: Option<&str>,
        effect: &str,
        effect_type: Option<&str>,
        weight: f64,
    ) -> CausalMemoryResult<()> {
        validate_weight(weight)?;
        let mut graph = self.write()?;
        let src = graph.ensure_node(cause, cause_type);
        let tgt = graph.ensure_node(effect, effect_type);
        graph.upsert_edge(src, tgt, weight);
        Ok(())
    }

    fn node_count(&self) -> CausalMemoryResult<usize> {
        Ok(self.read()?.graph.node_count())
    }

    fn edge_count(&self) -> CausalMemoryResult<usize> {
        Ok(self.read()?.graph.edge_count())
    }
}
