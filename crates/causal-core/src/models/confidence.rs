use std::fmt;

use serde::{Deserialize, Serialize};

/// The process-wide track record of successful verifications, clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SystemConfidence(f64);

impl SystemConfidence {
    /// Create a new SystemConfidence, clamping to [0.0, 1.0]. NaN becomes 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SystemConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f64> for SystemConfidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<SystemConfidence> for f64 {
    fn from(c: SystemConfidence) -> Self {
        c.0
    }
}
