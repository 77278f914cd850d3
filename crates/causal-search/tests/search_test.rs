//! Path search over the fixture graphs and small hand-built graphs.

use causal_core::errors::{CausalMemoryError, GraphError};
use causal_core::traits::ICausalGraphStore;
use causal_search::{search, PathOrdering, PathSearchEngine, SearchOptions};
use causal_storage::{InMemoryGraph, SqliteGraph};

fn incident() -> InMemoryGraph {
    let graph = InMemoryGraph::new();
    test_fixtures::incident_graph().populate(&graph).unwrap();
    graph
}

fn innovation() -> InMemoryGraph {
    let graph = InMemoryGraph::new();
    test_fixtures::innovation_graph().populate(&graph).unwrap();
    graph
}

fn graph_of(edges: &[(&str, &str, f64)]) -> InMemoryGraph {
    let graph = InMemoryGraph::new();
    for &(s, t, w) in edges {
        graph.add_causal_link(s, None, t, None, w).unwrap();
    }
    graph
}

// ── Verify mode ──────────────────────────────────────────────────────────

#[test]
fn verify_finds_two_hop_chain() {
    let graph = incident();
    let path = PathSearchEngine::default()
        .verify(&graph, "Memory_Leak", "Server_Crash", None)
        .unwrap()
        .expect("chain should verify");
    assert_eq!(path.nodes(), vec!["Memory_Leak", "High_CPU", "Server_Crash"]);
    assert!((path.path_weight() - 0.855).abs() < 1e-9);
}

#[test]
fn verify_prefers_strength_over_brevity() {
    let graph = incident();
    // With a low floor the direct 0.4 edge qualifies but the chain is stronger.
    let path = PathSearchEngine::default()
        .verify(&graph, "Memory_Leak", "Server_Crash", Some(0.3))
        .unwrap()
        .unwrap();
    assert_eq!(path.length(), 2);
}

#[test]
fn verify_single_strong_edge() {
    let graph = incident();
    let path = PathSearchEngine::default()
        .verify(&graph, "Database_Query_Slowdown", "High_Latency", None)
        .unwrap()
        .unwrap();
    assert_eq!(path.length(), 1);
    assert_eq!(path.path_weight(), 0.98);
}

#[test]
fn verify_with_no_edge_above_floor_is_not_found() {
    let graph = incident();
    let result = PathSearchEngine::default()
        .verify(&graph, "Disk_Full", "Write_Errors", None)
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn verify_rejects_path_whose_product_falls_below_threshold() {
    let graph = graph_of(&[("A", "B", 0.6), ("B", "C", 0.6)]);
    let result = search(&graph, "A", "C", &SearchOptions::verify(0.5, 5)).unwrap();
    assert!(result.is_none(), "0.36 is below the 0.5 bound");
}

#[test]
fn verify_accepts_product_exactly_at_threshold() {
    let graph = graph_of(&[("A", "B", 0.5), ("B", "C", 1.0)]);
    let path = search(&graph, "A", "C", &SearchOptions::verify(0.5, 5))
        .unwrap()
        .unwrap();
    assert_eq!(path.path_weight(), 0.5);
}

#[test]
fn unknown_endpoints_are_not_found() {
    let graph = incident();
    let engine = PathSearchEngine::default();
    assert!(engine.verify(&graph, "Nope", "High_CPU", None).unwrap().is_none());
    assert!(engine.verify(&graph, "Memory_Leak", "Nope", None).unwrap().is_none());
}

#[test]
fn start_equal_to_target_is_not_found() {
    let graph = incident();
    let result = PathSearchEngine::default()
        .verify(&graph, "Memory_Leak", "Memory_Leak", Some(0.0))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn hop_bound_is_respected() {
    let chain: Vec<(String, String)> = (0..6)
        .map(|i| (format!("n{i}"), format!("n{}", i + 1)))
        .collect();
    let graph = InMemoryGraph::new();
    for (s, t) in &chain {
        graph.add_causal_link(s, None, t, None, 1.0).unwrap();
    }
    assert!(search(&graph, "n0", "n6", &SearchOptions::verify(0.5, 5))
        .unwrap()
        .is_none());
    let path = search(&graph, "n0", "n6", &SearchOptions::verify(0.5, 6))
        .unwrap()
        .unwrap();
    assert_eq!(path.length(), 6);
}

#[test]
fn cycles_do_not_trap_the_search() {
    let graph = incident();
    // High_Latency -> Cache_Miss -> Database_Query_Slowdown -> High_Latency is a cycle.
    let options = SearchOptions::innovate(Vec::<String>::new(), 7, 0.1);
    let path = search(&graph, "High_Latency", "Database_Query_Slowdown", &options)
        .unwrap()
        .unwrap();
    assert_eq!(
        path.nodes(),
        vec!["High_Latency", "Cache_Miss", "Database_Query_Slowdown"]
    );
}

#[test]
fn exact_ties_break_on_node_names() {
    let graph = graph_of(&[("A", "C", 0.5), ("C", "D", 1.0), ("A", "B", 0.5), ("B", "D", 1.0)]);
    for options in [
        SearchOptions::verify(0.5, 5),
        SearchOptions::innovate(Vec::<String>::new(), 5, 0.1),
    ] {
        let path = search(&graph, "A", "D", &options).unwrap().unwrap();
        assert_eq!(path.nodes(), vec!["A", "B", "D"]);
    }
}

#[test]
fn equal_weight_prefers_fewer_hops() {
    let graph = graph_of(&[("A", "D", 0.8), ("A", "B", 1.0), ("B", "D", 0.8)]);
    let path = search(&graph, "A", "D", &SearchOptions::verify(0.5, 5))
        .unwrap()
        .unwrap();
    assert_eq!(path.nodes(), vec!["A", "D"]);
}

// ── Innovate mode ────────────────────────────────────────────────────────

#[test]
fn innovate_routes_around_blocking_constraints() {
    let graph = innovation();
    let fixture = test_fixtures::innovation_graph();
    let path = PathSearchEngine::default()
        .innovate(
            &graph,
            "Feature_Request",
            "Deployment",
            fixture.blocking_constraints.clone(),
        )
        .unwrap()
        .expect("alternate route exists");
    // Three hops beats the stronger four-hop hotfix route; among three-hop
    // routes the feature-flag route is strongest.
    assert_eq!(
        path.nodes(),
        vec!["Feature_Request", "Feature_Flag", "Dark_Launch", "Deployment"]
    );
    assert!((path.path_weight() - 0.405).abs() < 1e-9);
    for blocked in &fixture.blocking_constraints {
        assert!(!path.contains_node(blocked));
    }
}

#[test]
fn innovate_ignores_edges_below_its_floor() {
    let graph = innovation();
    // The direct 0.05 edge is below the 0.1 floor.
    let path = PathSearchEngine::default()
        .innovate(&graph, "Feature_Request", "Deployment", Vec::<String>::new())
        .unwrap()
        .unwrap();
    assert_eq!(path.length(), 3);
    assert_eq!(
        path.nodes(),
        vec!["Feature_Request", "Code_Review", "Testing", "Deployment"]
    );
}

#[test]
fn forbidden_endpoint_is_not_found() {
    let graph = innovation();
    let engine = PathSearchEngine::default();
    assert!(engine
        .innovate(&graph, "Feature_Request", "Testing", ["Testing"])
        .unwrap()
        .is_none());
    assert!(engine
        .innovate(&graph, "Code_Review", "Deployment", ["Code_Review"])
        .unwrap()
        .is_none());
}

#[test]
fn innovate_fails_when_every_route_is_blocked() {
    let graph = graph_of(&[("A", "Gate", 0.9), ("Gate", "B", 0.9)]);
    let result = PathSearchEngine::default()
        .innovate(&graph, "A", "B", ["Gate"])
        .unwrap();
    assert!(result.is_none());
}

// ── Options & stores ─────────────────────────────────────────────────────

#[test]
fn invalid_options_are_an_error() {
    let graph = incident();
    let mut options = SearchOptions::verify(0.5, 5);
    options.max_hops = 0;
    let err = search(&graph, "Memory_Leak", "Server_Crash", &options).unwrap_err();
    assert!(matches!(
        err,
        CausalMemoryError::GraphError(GraphError::InvalidSearchOptions { .. })
    ));

    let options = SearchOptions {
        max_hops: 3,
        min_edge_weight: f64::NAN,
        forbidden_nodes: Default::default(),
        accept_threshold: None,
        ordering: PathOrdering::ShortestThenStrongest,
    };
    assert!(search(&graph, "Memory_Leak", "Server_Crash", &options).is_err());
}

#[test]
fn sqlite_store_gives_the_same_answers() {
    let sqlite = SqliteGraph::open_in_memory().unwrap();
    test_fixtures::innovation_graph().populate(&sqlite).unwrap();
    let memory = innovation();

    let engine = PathSearchEngine::default();
    let blocked = ["Code_Review", "Testing"];
    let a = engine
        .innovate(&sqlite, "Feature_Request", "Deployment", blocked)
        .unwrap();
    let b = engine
        .innovate(&memory, "Feature_Request", "Deployment", blocked)
        .unwrap();
    assert_eq!(a, b);

    let a = engine.verify(&sqlite, "Feature_Request", "Deployment", None).unwrap();
    let b = engine.verify(&memory, "Feature_Request", "Deployment", None).unwrap();
    assert_eq!(a, b);
    assert!((a.unwrap().path_weight() - 0.81225).abs() < 1e-9);
}
