use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::{validate_weight, CausalEdge, EdgeKey};
use crate::errors::GraphError;

/// A non-empty simple walk of causal edges.
///
/// Construction checks that consecutive edges connect, that no node repeats,
/// and that every weight is in range. A `CausalPath` that exists is valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CausalPath {
    edges: Vec<CausalEdge>,
}

impl CausalPath {
    pub fn new(edges: Vec<CausalEdge>) -> Result<Self, GraphError> {
        let Some(first) = edges.first() else {
            return Err(GraphError::InvalidPath {
                reason: "path has no edges".to_string(),
            });
        };

        let mut seen: HashSet<&str> = HashSet::with_capacity(edges.len() + 1);
        seen.insert(first.source.as_str());
        let mut cursor = first.source.as_str();

        for edge in &edges {
            if edge.source != cursor {
                return Err(GraphError::InvalidPath {
                    reason: format!("edge {} does not continue from {cursor}", edge.key()),
                });
            }
            validate_weight(edge.weight)?;
            if !seen.insert(edge.target.as_str()) {
                return Err(GraphError::InvalidPath {
                    reason: format!("node {} appears twice", edge.target),
                });
            }
            cursor = edge.target.as_str();
        }

        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[CausalEdge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<CausalEdge> {
        self.edges
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(CausalEdge::key).collect()
    }

    /// Number of edges.
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    /// Product of the edge weights.
    pub fn path_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).product()
    }

    /// Node names in walk order, start to end.
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        nodes.push(self.start());
        nodes.extend(self.edges.iter().map(|e| e.target.as_str()));
        nodes
    }

    pub fn start(&self) -> &str {
        // Non-empty by construction.
        self.edges.first().map(|e| e.source.as_str()).unwrap_or_default()
    }

    pub fn end(&self) -> &str {
        self.edges.last().map(|e| e.target.as_str()).unwrap_or_default()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.start() == name || self.edges.iter().any(|e| e.target == name)
    }
}

impl fmt::Display for CausalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start())?;
        for edge in &self.edges {
            write!(f, " -[{:.4}]-> {}", edge.weight, edge.target)?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for CausalPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            edges: Vec<CausalEdge>,
        }
        let raw = Raw::deserialize(deserializer)?;
        CausalPath::new(raw.edges).map_err(serde::de::Error::custom)
    }
}
