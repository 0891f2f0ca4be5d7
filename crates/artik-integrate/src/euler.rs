//! Mechanism-wide Euler step.
//!
//! Positions are advanced joint by joint with the schemes of
//! [`integrate_joint`], then velocities get `α ← α + α̇·step`. Each joint only
//! reads its own slices, so the order of joints does not matter.

use tracing::{debug, trace};

use artik_model::{Model, ModelError, State};

use crate::joint::integrate_joint;
use crate::{Result, Tolerance};

/// Pluggable integrator.
///
/// Implementations define how to advance a mechanism state by one step.
pub trait Integrator {
    /// Advance `state` by `step` in place.
    ///
    /// The state buffers are assumed to match the model layout; a mismatch
    /// panics on slicing or yields meaningless results.
    fn integrate(&self, model: &Model, state: &mut State, step: f64);

    /// Validated variant of [`integrate`](Self::integrate).
    ///
    /// Every state buffer is checked against the model layout first and the
    /// first mismatch is returned with `state` left untouched. Non-finite
    /// numbers, `step` included, are not checked and propagate as they do
    /// through [`integrate`](Self::integrate).
    fn safe_integrate(
        &self,
        model: &Model,
        state: &mut State,
        step: f64,
    ) -> artik_model::Result<()> {
        if let Err(err) = model.check_state(state) {
            let ModelError::DimensionMismatch {
                sequence,
                joint,
                expected,
                actual,
            } = &err;
            let joint_name = joint.and_then(|i| model.joint_name(i));
            debug!(
                %sequence,
                ?joint,
                ?joint_name,
                expected,
                actual,
                "state does not match model layout"
            );
            return Err(err);
        }
        self.integrate(model, state, step);
        Ok(())
    }
}

/// Euler integrator with constant-acceleration position updates.
///
/// Spherical and free joint attitudes use a truncated Magnus series
/// controlled by its [`Tolerance`], which is validated on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerIntegrator {
    tolerance: Tolerance,
}

impl EulerIntegrator {
    /// Integrator with the default (tight) tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Integrator with an explicit series tolerance.
    pub fn with_tolerance(tolerance: Tolerance) -> Result<Self> {
        tolerance.validate()?;
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }
}

impl Integrator for EulerIntegrator {
    fn integrate(&self, model: &Model, state: &mut State, step: f64) {
        trace!(njoints = model.njoints(), step, "euler step");

        let State { q, alpha, alpha_dot } = state;
        let q = q.as_mut_slice();
        let alpha = alpha.as_mut_slice();
        let alpha_dot = alpha_dot.as_slice();

        for (i, joint) in model.joints().iter().enumerate() {
            let qr = model.q_range(i);
            let vr = model.v_range(i);

            integrate_joint(
                joint.joint_type,
                &alpha[vr.clone()],
                &alpha_dot[vr.clone()],
                step,
                &mut q[qr],
                &self.tolerance,
            );

            for (a, ad) in alpha[vr.clone()].iter_mut().zip(&alpha_dot[vr]) {
                *a += ad * step;
            }
        }
    }
}

/// Advance `state` by `step` with the default tolerance, without checks.
///
/// # Panics
/// If a state buffer is shorter than the model layout.
pub fn integrate(model: &Model, state: &mut State, step: f64) {
    EulerIntegrator::default().integrate(model, state, step);
}

/// Advance `state` by `step` with the default tolerance after checking the
/// state against the model. Nothing is modified on error.
pub fn safe_integrate(model: &Model, state: &mut State, step: f64) -> artik_model::Result<()> {
    EulerIntegrator::default().safe_integrate(model, state, step)
}
