mod claim;
mod confidence;
mod edge;
mod node;
mod outcome;
mod path;
mod risk;

pub use claim::{Claim, ClaimType, VerifiedClaim};
pub use confidence::SystemConfidence;
pub use edge::{validate_weight, CausalEdge, EdgeKey};
pub use node::CausalNode;
pub use outcome::{DecisionOutcome, InnovationOutcome};
pub use path::CausalPath;
pub use risk::RiskAssessment;
