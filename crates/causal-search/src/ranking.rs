//! Candidate ranking. `Ordering::Less` means the left candidate wins.

use std::cmp::Ordering;

use causal_core::models::CausalEdge;

use crate::options::PathOrdering;

/// A complete start → target walk found during enumeration.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub edges: Vec<CausalEdge>,
    /// Running product of edge weights, accumulated in walk order.
    pub weight: f64,
}

impl Candidate {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Node sequence after the shared start node.
    fn sequence(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(|e| e.target.as_str())
    }
}

pub(crate) fn rank(ordering: PathOrdering, a: &Candidate, b: &Candidate) -> Ordering {
    let by_weight = b.weight.total_cmp(&a.weight);
    let by_length = a.len().cmp(&b.len());
    let primary = match ordering {
        PathOrdering::StrongestFirst => by_weight.then(by_length),
        PathOrdering::ShortestThenStrongest => by_length.then(by_weight),
    };
    primary.then_with(|| a.sequence().cmp(b.sequence()))
}
