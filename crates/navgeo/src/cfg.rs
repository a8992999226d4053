//! Tolerance configuration for floating-point geometric decisions.
//!
//! Policy
//! - Integer predicates (cross/dot signs) are exact and never take a `GeomCfg`.
//! - Anything that compares `f64` magnitudes (distances, projections, circle
//!   discriminants) takes a `GeomCfg` by value. There is no process-wide
//!   comparator; tests can run side by side with different tolerances.

/// Normal precision, used for intersection-existence checks.
pub const EPSILON: f64 = 1e-8;
/// Low precision, the default comparator for ordering and boundary decisions.
pub const LOW_EPSILON: f64 = 1e-2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Slack for "does this parameter lie on the segment" style checks.
    pub eps_exact: f64,
    /// Slack used by the comparator methods below.
    pub eps_cmp: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_exact: EPSILON,
            eps_cmp: LOW_EPSILON,
        }
    }
}

impl GeomCfg {
    /// Configuration whose comparator uses `eps_cmp` and keeps the normal exact slack.
    #[inline]
    pub fn with_cmp(eps_cmp: f64) -> Self {
        Self {
            eps_cmp,
            ..Self::default()
        }
    }

    /// `|a - b| < eps_cmp`.
    #[inline]
    pub fn equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.eps_cmp
    }

    /// `a > b` by more than `eps_cmp`.
    #[inline]
    pub fn greater(&self, a: f64, b: f64) -> bool {
        a >= b && (a - b).abs() > self.eps_cmp
    }

    /// `a < b` by more than `eps_cmp`.
    #[inline]
    pub fn smaller(&self, a: f64, b: f64) -> bool {
        a <= b && (a - b).abs() > self.eps_cmp
    }

    #[inline]
    pub fn greater_or_equal(&self, a: f64, b: f64) -> bool {
        a >= b || (a - b).abs() < self.eps_cmp
    }

    #[inline]
    pub fn smaller_or_equal(&self, a: f64, b: f64) -> bool {
        a <= b || (a - b).abs() < self.eps_cmp
    }
}
