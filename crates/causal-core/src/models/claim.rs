use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CAUSES_RELATION;

/// Relation asserted by a claim. Anything unrecognised is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimType {
    #[default]
    Causes,
    Prevents,
    Enables,
    Other(String),
}

impl From<String> for ClaimType {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CAUSES" | "CAUSE" => Self::Causes,
            "PREVENTS" => Self::Prevents,
            "ENABLES" => Self::Enables,
            _ => Self::Other(raw),
        }
    }
}

impl From<ClaimType> for String {
    fn from(claim_type: ClaimType) -> Self {
        claim_type.to_string()
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Causes => f.write_str(CAUSES_RELATION),
            Self::Prevents => f.write_str("PREVENTS"),
            Self::Enables => f.write_str("ENABLES"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// A causal assertion extracted from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub cause: String,
    pub effect: String,
    #[serde(default)]
    pub claim_type: ClaimType,
}

impl Claim {
    pub fn new(cause: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
            effect: effect.into(),
            claim_type: ClaimType::Causes,
        }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.cause, self.claim_type, self.effect)
    }
}

/// A claim together with the result of verifying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedClaim {
    pub claim: Claim,
    /// Weight of the winning path, present only when verification succeeded.
    pub path_weight: Option<f64>,
}

impl VerifiedClaim {
    pub fn is_verified(&self) -> bool {
        self.path_weight.is_some()
    }
}
