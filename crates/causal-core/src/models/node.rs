use serde::{Deserialize, Serialize};

/// A named entity in the causal memory.
/// Names are unique and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CausalNode {
    pub name: String,
    /// Free-form type tag, e.g. "State" or "Action".
    #[serde(default)]
    pub node_type: Option<String>,
}

impl CausalNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: None,
        }
    }

    pub fn with_type(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: Some(node_type.into()),
        }
    }
}
