/// Failures of the external collaborators (extraction, question generation,
/// risk assessment). The decision policy absorbs all of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{collaborator} failed: {reason}")]
    Failed { collaborator: String, reason: String },

    #[error("{collaborator} timed out after {timeout_ms}ms")]
    TimedOut { collaborator: String, timeout_ms: u64 },

    #[error("{collaborator} returned a malformed response: {reason}")]
    Malformed { collaborator: String, reason: String },
}

impl CollaboratorError {
    pub fn failed(collaborator: &str, reason: impl Into<String>) -> Self {
        Self::Failed {
            collaborator: collaborator.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed(collaborator: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            collaborator: collaborator.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the collaborator that failed.
    pub fn collaborator(&self) -> &str {
        match self {
            Self::Failed { collaborator, .. }
            | Self::TimedOut { collaborator, .. }
            | Self::Malformed { collaborator, .. } => collaborator,
        }
    }
}
