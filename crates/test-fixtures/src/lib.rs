//! Test fixture loader for causal memory graph scenarios.
//!
//! Fixture graphs live as JSON under the workspace `test-fixtures/` directory and
//! can be loaded into any `ICausalGraphStore`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use causal_core::errors::CausalMemoryResult;
use causal_core::traits::ICausalGraphStore;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("graphs").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureNode {
    pub name: String,
    #[serde(default)]
    pub node_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// A causal graph scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphFixture {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<FixtureNode>,
    pub edges: Vec<FixtureEdge>,
    #[serde(default)]
    pub scalars: BTreeMap<String, f64>,
    /// Nodes a scenario treats as suspended constraints.
    #[serde(default)]
    pub blocking_constraints: Vec<String>,
}

impl GraphFixture {
    /// Write every node, edge, and scalar into `store`.
    pub fn populate(&self, store: &dyn ICausalGraphStore) -> CausalMemoryResult<()> {
        for node in &self.nodes {
            store.add_node(&node.name, node.node_type.as_deref())?;
        }
        for edge in &self.edges {
            store.add_causal_link(&edge.source, None, &edge.target, None, edge.weight)?;
        }
        for (key, value) in &self.scalars {
            store.set_scalar(key, *value)?;
        }
        Ok(())
    }
}

/// Load a graph fixture by name from `test-fixtures/graphs/<name>.json`.
pub fn load_graph(name: &str) -> GraphFixture {
    load_fixture(&format!("graphs/{name}.json"))
}

/// The incident scenario: slow queries, memory leaks, and crashes.
pub fn incident_graph() -> GraphFixture {
    load_graph("incident_scenario")
}

/// The delivery pipeline scenario with conventional checkpoints and alternate routes.
pub fn innovation_graph() -> GraphFixture {
    load_graph("innovation_scenario")
}
