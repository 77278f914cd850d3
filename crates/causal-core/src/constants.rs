/// Causal memory version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scalar key holding the process-wide system confidence.
pub const SYSTEM_CONFIDENCE_KEY: &str = "system_confidence";

/// The single relation type carried by every edge.
pub const CAUSES_RELATION: &str = "CAUSES";

/// Lower bound for edge weights and confidence.
pub const WEIGHT_MIN: f64 = 0.0;

/// Upper bound for edge weights and confidence.
pub const WEIGHT_MAX: f64 = 1.0;
