//! Search options and the two standard instantiations.

use std::collections::BTreeSet;

use causal_core::config::SearchConfig;
use causal_core::errors::GraphError;

/// How competing candidate paths are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOrdering {
    /// Highest path weight, then fewer hops, then lexicographic node sequence.
    StrongestFirst,
    /// Fewest hops, then highest path weight, then lexicographic node sequence.
    ShortestThenStrongest,
}

/// Everything one search needs. The engine applies no defaults of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Maximum path length in edges. Must be positive.
    pub max_hops: usize,
    /// Every edge on a candidate must weigh at least this much.
    pub min_edge_weight: f64,
    /// Names that may not appear anywhere on a candidate, endpoints included.
    pub forbidden_nodes: BTreeSet<String>,
    /// The selected path must weigh at least this much, otherwise nothing is found.
    pub accept_threshold: Option<f64>,
    pub ordering: PathOrdering,
}

impl SearchOptions {
    /// Verify mode: the threshold is both the edge floor and the acceptance bound.
    pub fn verify(threshold: f64, max_hops: usize) -> Self {
        Self {
            max_hops,
            min_edge_weight: threshold,
            forbidden_nodes: BTreeSet::new(),
            accept_threshold: Some(threshold),
            ordering: PathOrdering::StrongestFirst,
        }
    }

    /// Innovate mode: route around `forbidden`, shortest first.
    pub fn innovate<I, S>(forbidden: I, max_hops: usize, min_edge_weight: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            max_hops,
            min_edge_weight,
            forbidden_nodes: forbidden.into_iter().map(Into::into).collect(),
            accept_threshold: None,
            ordering: PathOrdering::ShortestThenStrongest,
        }
    }

    /// Verify mode from config, with an optional caller override for the threshold.
    pub fn verify_from(config: &SearchConfig, threshold: Option<f64>) -> Self {
        Self::verify(
            threshold.unwrap_or(config.trust_threshold),
            config.verify_max_hops,
        )
    }

    pub fn innovate_from<I, S>(config: &SearchConfig, forbidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::innovate(
            forbidden,
            config.innovate_max_hops,
            config.innovate_min_edge_weight,
        )
    }

    pub fn is_forbidden(&self, name: &str) -> bool {
        self.forbidden_nodes.contains(name)
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.max_hops == 0 {
            return Err(invalid("max_hops must be positive"));
        }
        if !is_unit(self.min_edge_weight) {
            return Err(invalid(format!(
                "min_edge_weight must be within [0.0, 1.0], got {}",
                self.min_edge_weight
            )));
        }
        if let Some(threshold) = self.accept_threshold {
            if !is_unit(threshold) {
                return Err(invalid(format!(
                    "accept_threshold must be within [0.0, 1.0], got {threshold}"
                )));
            }
        }
        Ok(())
    }
}

fn is_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn invalid(reason: impl Into<String>) -> GraphError {
    GraphError::InvalidSearchOptions {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_uses_threshold_as_floor_and_bound() {
        let options = SearchOptions::verify(0.5, 5);
        assert_eq!(options.min_edge_weight, 0.5);
        assert_eq!(options.accept_threshold, Some(0.5));
        assert_eq!(options.ordering, PathOrdering::StrongestFirst);
        assert!(options.forbidden_nodes.is_empty());
    }

    #[test]
    fn innovate_has_no_acceptance_bound() {
        let options = SearchOptions::innovate(["Code_Review", "Testing"], 7, 0.1);
        assert_eq!(options.accept_threshold, None);
        assert_eq!(options.ordering, PathOrdering::ShortestThenStrongest);
        assert!(options.is_forbidden("Testing"));
        assert!(!options.is_forbidden("Deployment"));
    }

    #[test]
    fn config_instantiations_follow_config() {
        let config = SearchConfig::default();
        let verify = SearchOptions::verify_from(&config, None);
        assert_eq!(verify.max_hops, 5);
        assert_eq!(verify.min_edge_weight, 0.5);
        let overridden = SearchOptions::verify_from(&config, Some(0.8));
        assert_eq!(overridden.accept_threshold, Some(0.8));
        let innovate = SearchOptions::innovate_from(&config, Vec::<String>::new());
        assert_eq!(innovate.max_hops, 7);
        assert_eq!(innovate.min_edge_weight, 0.1);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut options = SearchOptions::verify(0.5, 0);
        assert!(options.validate().is_err());
        options.max_hops = 3;
        assert!(options.validate().is_ok());
        options.min_edge_weight = f64::NAN;
        assert!(options.validate().is_err());
        options.min_edge_weight = 0.5;
        options.accept_threshold = Some(1.5);
        assert!(options.validate().is_err());
        options.accept_threshold = Some(f64::NAN);
        assert!(options.validate().is_err());
    }
}
