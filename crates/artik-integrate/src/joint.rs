//! Per-joint position update.

use artik_math::{Quat, Vec3};
use artik_model::JointType;

use crate::Tolerance;
use crate::so3::integrate_attitude_with;

/// Overwrite the position slice `q` of one joint with its value after `step`,
/// given its velocity `alpha` and constant acceleration `alpha_dot`.
///
/// Slices must have the joint's layout (`nq` for `q`, `dof` for the others).
/// Velocities of spherical and free joints are in the body frame; the free
/// joint translation `q[4..7]` is in the parent frame.
///
/// # Panics
/// If a slice is shorter than the joint layout requires.
pub fn integrate_joint(
    joint_type: JointType,
    alpha: &[f64],
    alpha_dot: &[f64],
    step: f64,
    q: &mut [f64],
    tolerance: &Tolerance,
) {
    let step2 = step * step;

    match joint_type {
        JointType::Revolute | JointType::Prismatic => {
            q[0] += alpha[0] * step + alpha_dot[0] * step2 / 2.0;
        }
        JointType::Cylindrical => {
            q[0] += alpha[0] * step + alpha_dot[0] * step2 / 2.0;
            q[1] += alpha[1] * step + alpha_dot[1] * step2 / 2.0;
        }
        JointType::Planar => {
            // First-order update at constant velocity.
            // TODO: take alpha_dot into account once the planar screw motion is settled.
            let q1_rate = q[2] * alpha[0] + alpha[1];
            let q2_rate = -q[1] * alpha[0] + alpha[2];
            q[0] += alpha[0] * step;
            q[1] += q1_rate * step;
            q[2] += q2_rate * step;
        }
        JointType::Spherical => {
            let qi = Quat::from_slice(q).normalize();
            let wi = Vec3::new(alpha[0], alpha[1], alpha[2]);
            let wd = Vec3::new(alpha_dot[0], alpha_dot[1], alpha_dot[2]);
            integrate_attitude_with(&qi, &wi, &wd, step, tolerance).write_slice(q);
        }
        JointType::Free => {
            let qi = Quat::from_slice(q).normalize();
            let wi = Vec3::new(alpha[0], alpha[1], alpha[2]);
            let wd = Vec3::new(alpha_dot[0], alpha_dot[1], alpha_dot[2]);
            let qf = integrate_attitude_with(&qi, &wi, &wd, step, tolerance);
            let qh = integrate_attitude_with(&qi, &wi, &wd, step / 2.0, tolerance);

            // ẋ = R(t)·v(t) has no closed form here: Simpson's rule on three samples
            let vi = Vec3::new(alpha[3], alpha[4], alpha[5]);
            let a = Vec3::new(alpha_dot[3], alpha_dot[4], alpha_dot[5]);
            let vh = vi + a * (step / 2.0);
            let vf = vi + a * step;

            let k1 = qi.rotate(&vi) * step;
            let k2 = qh.rotate(&vh) * step;
            let k4 = qf.rotate(&vf) * step;
            let dx = (k1 + k2 * 4.0 + k4) / 6.0;

            qf.write_slice(q);
            q[4] += dx.x;
            q[5] += dx.y;
            q[6] += dx.z;
        }
        JointType::Fixed => {}
    }
}
