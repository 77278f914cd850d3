use criterion::{black_box, criterion_group, criterion_main, Criterion};

use causal_core::traits::ICausalGraphStore;
use causal_search::{search, SearchOptions};
use causal_storage::InMemoryGraph;

/// Layered graph: 200 nodes, each linked to the next 5, weights varying in [0.55, 0.95].
fn build_1k_edge_graph() -> InMemoryGraph {
    let graph = InMemoryGraph::new();
    let n = 200;
    for i in 0..n {
        for j in 1..=5 {
            let target = i + j;
            if target < n {
                let weight = 0.55 + 0.4 * (((i * 7 + j * 13) % 10) as f64 / 10.0);
                graph
                    .add_causal_link(&format!("n{i}"), None, &format!("n{target}"), None, weight)
                    .unwrap();
            }
        }
    }
    graph
}

fn bench_verify_5_hops(c: &mut Criterion) {
    let graph = build_1k_edge_graph();
    let options = SearchOptions::verify(0.5, 5);

    c.bench_function("verify_5_hops_1k_edges", |b| {
        b.iter(|| search(black_box(&graph), "n0", "n20", &options).unwrap());
    });
}

fn bench_innovate_7_hops(c: &mut Criterion) {
    let graph = build_1k_edge_graph();
    let options = SearchOptions::innovate(["n5", "n10", "n15"], 7, 0.1);

    c.bench_function("innovate_7_hops_1k_edges", |b| {
        b.iter(|| search(black_box(&graph), "n0", "n30", &options).unwrap());
    });
}

criterion_group!(benches, bench_verify_5_hops, bench_innovate_7_hops);
criterion_main!(benches);
