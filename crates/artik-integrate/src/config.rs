//! Tolerance settings for the truncated Magnus series.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{IntegrateError, Result};

/// Error bounds the Magnus series must satisfy before it stops adding terms.
///
/// The series stops at the first truncation whose next-term bound is below
/// both `rel_eps * |Ω₁|` and `abs_eps`. It never goes past five terms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerance {
    /// Relative bound, scaled by the norm of the first-order term.
    pub rel_eps: f64,
    /// Absolute bound (radians).
    pub abs_eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::tight()
    }
}

impl Tolerance {
    /// Create a tolerance from explicit bounds.
    #[must_use]
    pub fn new(rel_eps: f64, abs_eps: f64) -> Self {
        Self { rel_eps, abs_eps }
    }

    /// Near machine precision. This is the default.
    #[must_use]
    pub fn tight() -> Self {
        Self {
            rel_eps: 1e-12,
            abs_eps: 1e-13,
        }
    }

    /// Engineering tolerance for real-time loops.
    #[must_use]
    pub fn loose() -> Self {
        Self {
            rel_eps: 1e-8,
            abs_eps: 1e-10,
        }
    }

    /// Squared error budget for a series whose first term has squared norm `sqn1`.
    #[inline]
    pub(crate) fn eps2(&self, sqn1: f64) -> f64 {
        (self.rel_eps * self.rel_eps * sqn1).min(self.abs_eps * self.abs_eps)
    }

    /// Validate the tolerance.
    pub fn validate(&self) -> Result<()> {
        if !self.rel_eps.is_finite() || self.rel_eps < 0.0 {
            return Err(IntegrateError::invalid_tolerance(format!(
                "rel_eps must be finite and non-negative, got {}",
                self.rel_eps
            )));
        }
        if !self.abs_eps.is_finite() || self.abs_eps < 0.0 {
            return Err(IntegrateError::invalid_tolerance(format!(
                "abs_eps must be finite and non-negative, got {}",
                self.abs_eps
            )));
        }
        Ok(())
    }
}
