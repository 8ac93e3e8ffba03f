use serde::{Deserialize, Serialize};

/// Absolute tolerance applied by [`close`](crate::close) to numeric comparisons.
pub const TOLERANCE: f64 = 1e-8;

/// Tolerance policy controlling assertion behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Policy {
    /// Absolute tolerance allowed between two numbers before they differ.
    #[serde(default = "Policy::default_abs_tol")]
    pub abs_tol: f64,
}

impl Policy {
    const fn default_abs_tol() -> f64 {
        TOLERANCE
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            abs_tol: Self::default_abs_tol(),
        }
    }
}
