//! Attitude integration on SO(3).

use artik_math::{Quat, Vec3};

use crate::Tolerance;
use crate::magnus::magnus_expansion;

/// Advance attitude `qi` by `step` under body-frame angular velocity `wi` and
/// constant angular acceleration `wd`, with the default tolerance.
///
/// The result is always re-normalized.
pub fn integrate_attitude(qi: &Quat, wi: &Vec3, wd: &Vec3, step: f64) -> Quat {
    integrate_attitude_with(qi, wi, wd, step, &Tolerance::default())
}

/// [`integrate_attitude`] with an explicit series tolerance.
pub fn integrate_attitude_with(
    qi: &Quat,
    wi: &Vec3,
    wd: &Vec3,
    step: f64,
    tolerance: &Tolerance,
) -> Quat {
    let expansion = magnus_expansion(wi, wd, step, tolerance);
    qi.mul(&Quat::exp(&expansion.omega)).normalize()
}
