//! Simulation state: generalized coordinates mutated by the integrator.

use artik_math::DVec;

/// Generalized position, velocity and acceleration of a mechanism.
///
/// The buffers are flat; a joint's entries are the slice given by
/// [`Model::q_range`](crate::Model::q_range) and
/// [`Model::v_range`](crate::Model::v_range).
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Generalized positions (q).
    pub q: DVec,
    /// Generalized velocities (α), in each joint's local frame.
    pub alpha: DVec,
    /// Generalized accelerations (α̇), in each joint's local frame.
    pub alpha_dot: DVec,
}

impl State {
    /// Create a zero-initialized state for `nq` position parameters and `nv` velocity DOFs.
    ///
    /// Quaternion entries are zero too; use
    /// [`Model::default_state`](crate::Model::default_state) for a valid
    /// neutral configuration.
    pub fn new(nq: usize, nv: usize) -> Self {
        Self {
            q: DVec::zeros(nq),
            alpha: DVec::zeros(nv),
            alpha_dot: DVec::zeros(nv),
        }
    }

    /// Build a state from explicit buffers. No layout check is made here.
    pub fn from_vecs(q: Vec<f64>, alpha: Vec<f64>, alpha_dot: Vec<f64>) -> Self {
        Self {
            q: DVec::from_vec(q),
            alpha: DVec::from_vec(alpha),
            alpha_dot: DVec::from_vec(alpha_dot),
        }
    }
}
