//! Truncated Magnus expansion for a frame under constant angular acceleration.
//!
//! For `Ṙ = R·[w(t)]×` with `w(t) = w + t·ẇ`, the rotation after a step `h`
//! is `R(h) = R(0)·exp([Ω]×)`. With `w₁ = w + h·ẇ` the first terms are
//!
//! ```text
//! Ω₁ = (w + w₁)·h/2
//! Ω₂ = (w × w₁)·h²/12
//! Ω₃ = (Ω₂ × ẇ)·h²/20
//! Ω₄ = (28|Ω₁|² − 3|ẇ|²h⁴)/1680 · Ω₂
//! Ω₅ = ((120|Ω₁|² − 5|ẇ|²h⁴)·Ω₃ − 24|Ω₂|²·Ω₁)/5040
//! ```
//!
//! Ω₁ alone is exact when `w` and `ẇ` are parallel (in particular for
//! constant velocity). Ω₃ is the right-multiplied form: it pairs with the
//! sign of Ω₂ above.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use artik_math::Vec3;

use crate::Tolerance;

/// How many Magnus terms were summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeriesOrder {
    /// Ω₁ + Ω₂.
    Two,
    /// Ω₁ + … + Ω₄.
    Four,
    /// Ω₁ + … + Ω₅, whether or not the tolerance was met.
    Five,
}

impl SeriesOrder {
    /// Number of summed terms.
    pub fn terms(&self) -> usize {
        match self {
            SeriesOrder::Two => 2,
            SeriesOrder::Four => 4,
            SeriesOrder::Five => 5,
        }
    }
}

/// Accumulated rotation over one step and the truncation used to get it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnusExpansion {
    /// Rotation vector Ω, in the frame at the start of the step.
    pub omega: Vec3,
    /// Number of terms summed.
    pub order: SeriesOrder,
}

/// Sum the first Magnus terms for initial angular velocity `w`, constant
/// angular acceleration `wd` and duration `step`.
///
/// Terms are added until the bound on the next one is below
/// `min(rel_eps·|Ω₁|, abs_eps)`, and never past the fifth. The bounds used
/// are `|Ω₃|² ≤ |ẇ|²h⁴/400`, `|Ω₄|² ≤ |Ω₁|⁴|Ω₂|²/3600` and
/// `|Ω₅|² ≤ (|ẇ|²h⁴|Ω₁|² + 8√(|ẇ|²h⁴|Ω₁|²|Ω₂|²) + 16|Ω₂|²)/840²`.
pub fn magnus_expansion(w: &Vec3, wd: &Vec3, step: f64, tolerance: &Tolerance) -> MagnusExpansion {
    let step2 = step * step;

    let w1 = w + wd * step;
    let o1 = (w + w1) * (step / 2.0);
    let o2 = w.cross(&w1) * (step2 / 12.0);

    let sqn1 = o1.norm_squared();
    let sqn2 = o2.norm_squared();
    let sqnd = wd.norm_squared();
    let sqndt4 = sqnd * step2 * step2;
    let sqn3 = sqndt4 / 400.0;
    let sqn4 = sqn1 * sqn1 * sqn2 / 3600.0;
    let eps2 = tolerance.eps2(sqn1);

    if sqn3 < eps2 && sqn4 < eps2 {
        return MagnusExpansion {
            omega: o1 + o2,
            order: SeriesOrder::Two,
        };
    }

    let o3 = o2.cross(wd) * (step2 / 20.0);
    let o4 = o2 * ((28.0 * sqn1 - 3.0 * sqndt4) / 1680.0);

    let sqn5 = (sqndt4 * sqn1 + 8.0 * (sqndt4 * sqn1 * sqn2).sqrt() + 16.0 * sqn2) / (840.0 * 840.0);

    if sqn5 < eps2 {
        return MagnusExpansion {
            omega: o1 + o2 + o3 + o4,
            order: SeriesOrder::Four,
        };
    }

    trace!(step, sqn5, eps2, "magnus series needs all five terms");

    let o5 = (o3 * (120.0 * sqn1 - 5.0 * sqndt4) - o1 * (24.0 * sqn2)) / 5040.0;
    MagnusExpansion {
        omega: o1 + o2 + o3 + o4 + o5,
        order: SeriesOrder::Five,
    }
}
