//! Quaternion attitude type.
//!
//! Convention: q = [w; x; y; z] where w is scalar, (x,y,z) is vector part.
//! Composition is the Hamilton product, and `q.rotate(v)` maps a vector
//! expressed in the frame attached to `q` into the reference frame.

use crate::{Mat3, Vec3, sinc};

/// A quaternion, normally of unit norm, representing a 3D attitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    /// Scalar part (w).
    pub w: f64,
    /// Vector part (x, y, z).
    pub v: Vec3,
}

impl Quat {
    /// Create a new quaternion from scalar and vector parts.
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            w,
            v: Vec3::new(x, y, z),
        }
    }

    /// Identity quaternion (no rotation).
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            v: Vec3::zeros(),
        }
    }

    /// Create quaternion from axis-angle representation.
    /// axis should be a unit vector, angle in radians.
    pub fn from_axis_angle(axis: &Vec3, angle: f64) -> Self {
        let half_angle = angle * 0.5;
        let (s, c) = half_angle.sin_cos();
        Self { w: c, v: *axis * s }
    }

    /// Read `[w, x, y, z]` from the first four entries of `s`.
    ///
    /// # Panics
    /// If `s` has fewer than four entries.
    #[inline]
    pub fn from_slice(s: &[f64]) -> Self {
        Self::new(s[0], s[1], s[2], s[3])
    }

    /// Write `[w, x, y, z]` into the first four entries of `s`.
    ///
    /// # Panics
    /// If `s` has fewer than four entries.
    #[inline]
    pub fn write_slice(&self, s: &mut [f64]) {
        s[0] = self.w;
        s[1] = self.v.x;
        s[2] = self.v.y;
        s[3] = self.v.z;
    }

    /// Euclidean norm of the four components.
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.v.norm_squared()).sqrt()
    }

    /// Normalize this quaternion to unit length.
    ///
    /// A quaternion too close to zero has no meaningful direction and maps to
    /// the identity.
    pub fn normalize(&self) -> Self {
        let norm = self.norm();
        if norm < 1e-12 {
            return Self::identity();
        }
        Self {
            w: self.w / norm,
            v: self.v / norm,
        }
    }

    /// Quaternion multiplication: self * other.
    pub fn mul(&self, other: &Quat) -> Quat {
        Quat {
            w: self.w * other.w - self.v.dot(&other.v),
            v: self.v.cross(&other.v) + other.v * self.w + self.v * other.w,
        }
    }

    /// Conjugate of the quaternion (inverse for unit quaternions).
    pub fn conjugate(&self) -> Quat {
        Quat {
            w: self.w,
            v: -self.v,
        }
    }

    /// Rotate `x` by this (unit) quaternion: q x q*.
    #[inline]
    pub fn rotate(&self, x: &Vec3) -> Vec3 {
        let t = self.v.cross(x) * 2.0;
        x + t * self.w + self.v.cross(&t)
    }

    /// Convert quaternion to 3x3 rotation matrix.
    pub fn to_matrix(&self) -> Mat3 {
        let w = self.w;
        let x = self.v.x;
        let y = self.v.y;
        let z = self.v.z;

        let x2 = x * x;
        let y2 = y * y;
        let z2 = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat3::new(
            1.0 - 2.0 * (y2 + z2),
            2.0 * (xy - wz),
            2.0 * (xz + wy),
            2.0 * (xy + wz),
            1.0 - 2.0 * (x2 + z2),
            2.0 * (yz - wx),
            2.0 * (xz - wy),
            2.0 * (yz + wx),
            1.0 - 2.0 * (x2 + y2),
        )
    }

    /// Exponential map of a rotation vector.
    ///
    /// `omega` is an element of so(3): its direction is the axis and its norm
    /// the angle. The rotation vector is halved before exponentiating,
    /// giving `[cos(|ω|/2), sinc(|ω|/2) ω/2]`, which is smooth through zero.
    pub fn exp(omega: &Vec3) -> Quat {
        let half = omega * 0.5;
        let n = half.norm();
        Quat {
            w: n.cos(),
            v: half * sinc(n),
        }
    }

    /// Logarithmic map: log(q) returns the rotation vector θu such that q = exp(θu).
    pub fn log(&self) -> Vec3 {
        let v_norm = self.v.norm();
        if v_norm < 1e-10 {
            // exp(θu) ≈ [1, θu/2] near the identity
            return self.v * (2.0 / self.w);
        }
        // For quaternion q = [cos(theta/2), sin(theta/2) * u], we have:
        // theta = 2 * atan2(sin(theta/2), cos(theta/2)) = 2 * atan2(|v|, w)
        let angle = 2.0 * v_norm.atan2(self.w);
        self.v * (angle / v_norm)
    }

    /// Angle of the relative rotation `self* ⊗ other`. `q` and `-q` are the
    /// same attitude and have zero angle between them.
    pub fn angle_to(&self, other: &Quat) -> f64 {
        let mut d = self.conjugate().mul(other);
        if d.w < 0.0 {
            d = Quat { w: -d.w, v: -d.v };
        }
        d.log().norm()
    }
}
