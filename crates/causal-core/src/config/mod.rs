pub mod defaults;
pub mod learning_config;
pub mod llm_config;
pub mod observability_config;
pub mod policy_config;
pub mod search_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CausalMemoryError, CausalMemoryResult};

pub use learning_config::LearningConfig;
pub use llm_config::LlmConfig;
pub use observability_config::ObservabilityConfig;
pub use policy_config::PolicyConfig;
pub use search_config::SearchConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CausalMemoryConfig {
    pub search: SearchConfig,
    pub learning: LearningConfig,
    pub policy: PolicyConfig,
    pub storage: StorageConfig,
    pub llm: LlmConfig,
    pub observability: ObservabilityConfig,
}

impl CausalMemoryConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn from_file(path: &Path) -> CausalMemoryResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CausalMemoryError::ConfigError(format!("read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&raw)
            .map_err(|e| CausalMemoryError::ConfigError(format!("parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engines cannot run with.
    pub fn validate(&self) -> CausalMemoryResult<()> {
        let unit = |name: &str, value: f64| -> CausalMemoryResult<()> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(CausalMemoryError::ConfigError(format!(
                    "{name} must be within [0.0, 1.0], got {value}"
                )))
            }
        };

        unit("search.trust_threshold", self.search.trust_threshold)?;
        unit("search.innovate_min_edge_weight", self.search.innovate_min_edge_weight)?;
        unit("learning.initial_confidence", self.learning.initial_confidence)?;
        unit("policy.risk_reject_threshold", self.policy.risk_reject_threshold)?;

        if self.search.verify_max_hops == 0 || self.search.innovate_max_hops == 0 {
            return Err(CausalMemoryError::ConfigError(
                "max hop counts must be positive".to_string(),
            ));
        }
        if !self.learning.eta.is_finite() || self.learning.eta < 0.0 {
            return Err(CausalMemoryError::ConfigError(format!(
                "learning.eta must be a non-negative finite number, got {}",
                self.learning.eta
            )));
        }
        if self.learning.weight_precision > 12 {
            return Err(CausalMemoryError::ConfigError(format!(
                "learning.weight_precision must be at most 12, got {}",
                self.learning.weight_precision
            )));
        }
        Ok(())
    }
}
