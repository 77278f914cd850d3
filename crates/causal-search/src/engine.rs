//! Depth-first enumeration of simple walks with selection-preserving pruning.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tracing::{debug, debug_span};

use causal_core::config::SearchConfig;
use causal_core::errors::CausalMemoryResult;
use causal_core::models::{CausalEdge, CausalPath};
use causal_core::traits::IGraphAccess;

use crate::options::{PathOrdering, SearchOptions};
use crate::ranking::{rank, Candidate};

/// Find the best qualifying path from `start` to `target`.
///
/// `Ok(None)` covers every not-found case: unknown or forbidden endpoints,
/// `start == target`, no qualifying walk, or a winner below the acceptance bound.
pub fn search(
    graph: &dyn IGraphAccess,
    start: &str,
    target: &str,
    options: &SearchOptions,
) -> CausalMemoryResult<Option<CausalPath>> {
    options.validate()?;

    if start == target {
        debug!(start, "start equals target, no simple walk can return to its origin");
        return Ok(None);
    }
    if options.is_forbidden(start) || options.is_forbidden(target) {
        debug!(start, target, "endpoint is forbidden");
        return Ok(None);
    }
    if !graph.node_exists(start)? || !graph.node_exists(target)? {
        debug!(start, target, "endpoint not in graph");
        return Ok(None);
    }

    let mut run = SearchRun::new(graph, target, options);
    let mut visited = HashSet::from([start.to_string()]);
    let mut trail = Vec::with_capacity(options.max_hops);
    run.extend(start, 1.0, &mut trail, &mut visited)?;

    debug!(
        start,
        target,
        expanded = run.expanded,
        pruned = run.pruned,
        candidates = run.candidates,
        "search finished"
    );

    let Some(best) = run.best else {
        return Ok(None);
    };
    if let Some(threshold) = options.accept_threshold {
        if best.weight < threshold {
            debug!(weight = best.weight, threshold, "best path below acceptance threshold");
            return Ok(None);
        }
    }
    Ok(Some(CausalPath::new(best.edges)?))
}

/// Mutable state of a single search call. Adjacency is memoized for the
/// duration of the call only.
struct SearchRun<'a> {
    graph: &'a dyn IGraphAccess,
    target: &'a str,
    options: &'a SearchOptions,
    adjacency: HashMap<String, Rc<Vec<(String, f64)>>>,
    best: Option<Candidate>,
    expanded: usize,
    pruned: usize,
    candidates: usize,
}

impl<'a> SearchRun<'a> {
    fn new(graph: &'a dyn IGraphAccess, target: &'a str, options: &'a SearchOptions) -> Self {
        Self {
            graph,
            target,
            options,
            adjacency: HashMap::new(),
            best: None,
            expanded: 0,
            pruned: 0,
            candidates: 0,
        }
    }

    /// Qualifying out-edges of `node`: at or above the floor and not forbidden.
    fn neighbours(&mut self, node: &str) -> CausalMemoryResult<Rc<Vec<(String, f64)>>> {
        if let Some(cached) = self.adjacency.get(node) {
            return Ok(Rc::clone(cached));
        }
        let floor = self.options.min_edge_weight;
        let mut edges: Vec<(String, f64)> = self
            .graph
            .get_edges_out(node)?
            .into_iter()
            .filter(|(dest, weight)| *weight >= floor && !self.options.is_forbidden(dest))
            .collect();
        // Strong edges first so the weight bound tightens early.
        if self.options.ordering == PathOrdering::StrongestFirst {
            edges.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        } else {
            edges.sort_by(|a, b| a.0.cmp(&b.0));
        }
        let edges = Rc::new(edges);
        self.adjacency.insert(node.to_string(), Rc::clone(&edges));
        Ok(edges)
    }

    /// Whether a partial walk with this running product can still win.
    fn can_win(&self, product: f64) -> bool {
        if self.options.ordering != PathOrdering::StrongestFirst {
            return true;
        }
        if let Some(threshold) = self.options.accept_threshold {
            if product < threshold {
                return false;
            }
        }
        match &self.best {
            Some(best) => product >= best.weight,
            None => true,
        }
    }

    fn extend(
        &mut self,
        node: &str,
        product: f64,
        trail: &mut Vec<CausalEdge>,
        visited: &mut HashSet<String>,
    ) -> CausalMemoryResult<()> {
        if trail.len() >= self.options.max_hops {
            return Ok(());
        }
        if self.options.ordering == PathOrdering::ShortestThenStrongest {
            if let Some(best) = &self.best {
                if trail.len() + 1 > best.len() {
                    self.pruned += 1;
                    return Ok(());
                }
            }
        }

        self.expanded += 1;
        let neighbours = self.neighbours(node)?;
        for (next, weight) in neighbours.iter() {
            if visited.contains(next) {
                continue;
            }
            let next_product = product * weight;
            if !self.can_win(next_product) {
                self.pruned += 1;
                continue;
            }

            trail.push(CausalEdge::new(node, next.as_str(), *weight));
            if next == self.target {
                self.offer(trail, next_product);
            } else {
                visited.insert(next.clone());
                self.extend(next, next_product, trail, visited)?;
                visited.remove(next);
            }
            trail.pop();
        }
        Ok(())
    }

    fn offer(&mut self, trail: &[CausalEdge], weight: f64) {
        self.candidates += 1;
        let candidate = Candidate {
            edges: trail.to_vec(),
            weight,
        };
        let wins = match &self.best {
            Some(best) => rank(self.options.ordering, &candidate, best) == Ordering::Less,
            None => true,
        };
        if wins {
            self.best = Some(candidate);
        }
    }
}

/// Search with the configured Verify and Innovate instantiations.
#[derive(Debug, Clone, Default)]
pub struct PathSearchEngine {
    pub config: SearchConfig,
}

impl PathSearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Is there a trustworthy path from `cause` to `effect`?
    /// `threshold` overrides the configured trust threshold.
    pub fn verify(
        &self,
        graph: &dyn IGraphAccess,
        cause: &str,
        effect: &str,
        threshold: Option<f64>,
    ) -> CausalMemoryResult<Option<CausalPath>> {
        let options = SearchOptions::verify_from(&self.config, threshold);
        let _span = debug_span!("verify", cause, effect, threshold = options.min_edge_weight).entered();
        search(graph, cause, effect, &options)
    }

    /// Is there any path from `start` to `target` that avoids `forbidden`?
    pub fn innovate<I, S>(
        &self,
        graph: &dyn IGraphAccess,
        start: &str,
        target: &str,
        forbidden: I,
    ) -> CausalMemoryResult<Option<CausalPath>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = SearchOptions::innovate_from(&self.config, forbidden);
        let _span = debug_span!("innovate", start, target, forbidden = options.forbidden_nodes.len()).entered();
        search(graph, start, target, &options)
    }
}
