//! Joint types and their generalized-coordinate layouts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Joint type enumeration.
///
/// Each variant fixes the number of velocity DOFs ([`dof`](Self::dof)), the
/// number of position parameters ([`nq`](Self::nq)) and the integration
/// scheme applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointType {
    /// 0 DOF fixed joint (rigid attachment).
    Fixed,
    /// Single rotational DOF about an axis.
    Revolute,
    /// Single translational DOF along an axis.
    Prismatic,
    /// 3 DOF spherical joint (ball joint).
    ///
    /// q = [qw, qx, qy, qz] (unit quaternion), velocity is the body-frame
    /// angular velocity.
    Spherical,
    /// 6 DOF free joint (floating base).
    ///
    /// q = [qw, qx, qy, qz, x, y, z]; velocity = [ω; v] in the body frame,
    /// while the translation is expressed in the parent frame.
    Free,
    /// 3 DOF planar joint: q = [θ, x, y].
    Planar,
    /// 2 DOF cylindrical joint: rotation about and translation along one axis.
    Cylindrical,
}

impl JointType {
    /// Number of degrees of freedom (velocity/acceleration dimension).
    pub fn dof(&self) -> usize {
        match self {
            JointType::Fixed => 0,
            JointType::Revolute | JointType::Prismatic => 1,
            JointType::Cylindrical => 2,
            JointType::Spherical | JointType::Planar => 3,
            JointType::Free => 6,
        }
    }

    /// Number of position parameters.
    ///
    /// Differs from [`dof`](Self::dof) for joints whose attitude is a quaternion.
    pub fn nq(&self) -> usize {
        match self {
            JointType::Spherical => 4,
            JointType::Free => 7,
            other => other.dof(),
        }
    }

    /// Whether the position starts with an attitude quaternion.
    pub fn has_quaternion(&self) -> bool {
        matches!(self, JointType::Spherical | JointType::Free)
    }

    /// Neutral configuration: identity attitude, zero angles and offsets.
    pub fn zero_position(&self) -> Vec<f64> {
        let mut q = vec![0.0; self.nq()];
        if self.has_quaternion() {
            q[0] = 1.0;
        }
        q
    }
}

/// A joint of the mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    /// Name of the joint, reported when a state does not fit the model.
    pub name: String,
    /// Joint type.
    pub joint_type: JointType,
}

impl Joint {
    /// Create a joint of the given type.
    pub fn new(name: impl Into<String>, joint_type: JointType) -> Self {
        Self {
            name: name.into(),
            joint_type,
        }
    }

    /// Number of degrees of freedom for this joint.
    pub fn dof(&self) -> usize {
        self.joint_type.dof()
    }

    /// Number of position parameters for this joint.
    pub fn nq(&self) -> usize {
        self.joint_type.nq()
    }
}
