//! Math primitives for the artik integrator.
//!
//! Thin nalgebra aliases plus the [`Quat`] attitude type and the scalar
//! helpers the SO(3) integration needs.

pub mod quaternion;

pub use quaternion::Quat;

use nalgebra as na;

/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;
/// 3x3 matrix alias.
pub type Mat3 = na::Matrix3<f64>;
/// Dynamic vector.
pub type DVec = na::DVector<f64>;

/// Cross-product matrix: [v]× such that [v]× w = v × w.
#[inline]
pub fn skew(v: &Vec3) -> Mat3 {
    Mat3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}

/// `sin(x) / x`, extended by continuity with `sinc(0) = 1`.
///
/// Below `eps^(1/4)` the Taylor expansion `1 - x²/6 + x⁴/120` is used, which
/// is exact to machine precision in that range and avoids the 0/0.
pub fn sinc(x: f64) -> f64 {
    let taylor_0_bound = f64::EPSILON;
    let taylor_2_bound = taylor_0_bound.sqrt();
    let taylor_n_bound = taylor_2_bound.sqrt();

    let ax = x.abs();
    if ax >= taylor_n_bound {
        return x.sin() / x;
    }

    let mut result = 1.0;
    if ax >= taylor_0_bound {
        let x2 = x * x;
        result -= x2 / 6.0;
        if ax >= taylor_2_bound {
            result += x2 * x2 / 120.0;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sinc_at_zero_is_one() {
        assert_eq!(sinc(0.0), 1.0);
    }

    #[test]
    fn sinc_matches_closed_form_away_from_zero() {
        for &x in &[0.3, -1.2, 2.5, 1e-2] {
            assert_relative_eq!(sinc(x), x.sin() / x, epsilon = 1e-15);
        }
    }

    #[test]
    fn sinc_is_continuous_across_taylor_switch() {
        let bound = f64::EPSILON.sqrt().sqrt();
        let below = sinc(bound * (1.0 - 1e-9));
        let above = sinc(bound * (1.0 + 1e-9));
        assert!((below - above).abs() < 1e-14);
    }

    #[test]
    fn skew_matches_cross_product() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        let w = Vec3::new(0.3, 0.7, -1.1);
        let lhs = skew(&v) * w;
        let rhs = v.cross(&w);
        assert_relative_eq!(lhs, rhs, epsilon = 1e-14);
    }
}
