//! A-priori error estimate for the free-joint translation update.
//!
//! The free joint integrates `ẋ = f(t) = R(t)·v(t)` with Simpson's rule,
//! whose error over a step `h` is `h⁵/2880·|f⁽⁴⁾(ξ)|` for some `ξ` in the
//! step. Evaluating the fourth derivative at the start of the step gives a
//! cheap leading-order estimate.

use artik_math::Vec3;

/// Squared norm of the fourth derivative of `f(t) = R(t)·v(t)` at `t = 0`,
/// where `R` rotates with body-frame velocity `w` and constant acceleration
/// `dw`, and `v` has constant acceleration `dv`.
///
/// With `·` the dot product and `×` the cross product,
///
/// ```text
/// f⁽⁴⁾ = R((|w|⁴ − 3|dw|²) v − 12 (w·dw) dv + (4 dw·dv − |w|² w·v) w
///        + (3 dw·v + 8 w·dv) dw + (5 (w·dw) v + 4 |w|² dv) × w
///        + (2 (w·v) w + |w|² v) × dw)
/// ```
///
/// The norm does not depend on `R`.
pub fn fourth_derivative_squared_norm(v: &Vec3, w: &Vec3, dv: &Vec3, dw: &Vec3) -> f64 {
    let nw2 = w.norm_squared();
    let nw4 = nw2 * nw2;
    let ndw2 = dw.norm_squared();
    let wv = w.dot(v);
    let wdw = w.dot(dw);
    let dwv = dw.dot(v);
    let wdv = w.dot(dv);
    let dwdv = dw.dot(dv);

    let u = v * (nw4 - 3.0 * ndw2) - dv * (12.0 * wdw)
        + w * (4.0 * dwdv - nw2 * wv)
        + dw * (3.0 * dwv + 8.0 * wdv)
        - w.cross(&(v * (5.0 * wdw) + dv * (4.0 * nw2)))
        - dw.cross(&(w * (2.0 * wv) + v * nw2));

    u.norm_squared()
}

/// Leading-order error of the free-joint translation update for one step.
///
/// `alpha` and `alpha_dot` are the 6-vectors `[ω; v]` and `[ω̇; v̇]` of the
/// joint. Returns `step⁵/2880·|f⁽⁴⁾(0)|`.
///
/// # Panics
/// If either slice has fewer than six entries.
pub fn free_translation_error_estimate(alpha: &[f64], alpha_dot: &[f64], step: f64) -> f64 {
    let w = Vec3::new(alpha[0], alpha[1], alpha[2]);
    let v = Vec3::new(alpha[3], alpha[4], alpha[5]);
    let dw = Vec3::new(alpha_dot[0], alpha_dot[1], alpha_dot[2]);
    let dv = Vec3::new(alpha_dot[3], alpha_dot[4], alpha_dot[5]);

    let step5 = step.powi(5);
    step5 / 2880.0 * fourth_derivative_squared_norm(&v, &w, &dv, &dw).sqrt()
}
