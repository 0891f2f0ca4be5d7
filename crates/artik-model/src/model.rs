//! Model definition: ordered joint list and its generalized-coordinate layout.

use std::ops::Range;

use crate::error::{ModelError, Result, Sequence};
use crate::{Joint, JointType, State};

/// Static model describing the joints of a mechanism, in mechanism order.
///
/// Joint `i` owns `q[q_offsets[i]..q_offsets[i] + nq_i]` in the position
/// buffer and `alpha[v_offsets[i]..v_offsets[i] + dof_i]` in the velocity
/// and acceleration buffers.
///
/// The layout is computed once by [`ModelBuilder::build`] and cannot be
/// edited afterwards, so there is always one offset per joint.
#[derive(Debug, Clone)]
pub struct Model {
    joints: Vec<Joint>,
    nq: usize,
    nv: usize,
    q_offsets: Vec<usize>,
    v_offsets: Vec<usize>,
}

impl Model {
    /// Number of joints.
    pub fn njoints(&self) -> usize {
        self.joints.len()
    }

    /// Joints, index = joint id.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Name of joint `i`, if it exists.
    pub fn joint_name(&self, i: usize) -> Option<&str> {
        self.joints.get(i).map(|j| j.name.as_str())
    }

    /// Total number of position parameters.
    pub fn nq(&self) -> usize {
        self.nq
    }

    /// Total number of velocity DOFs.
    pub fn nv(&self) -> usize {
        self.nv
    }

    /// Position offset of each joint.
    pub fn q_offsets(&self) -> &[usize] {
        &self.q_offsets
    }

    /// Velocity offset of each joint.
    pub fn v_offsets(&self) -> &[usize] {
        &self.v_offsets
    }

    /// Range of joint `i` in the position buffer.
    pub fn q_range(&self, i: usize) -> Range<usize> {
        let start = self.q_offsets[i];
        start..start + self.joints[i].nq()
    }

    /// Range of joint `i` in the velocity and acceleration buffers.
    pub fn v_range(&self, i: usize) -> Range<usize> {
        let start = self.v_offsets[i];
        start..start + self.joints[i].dof()
    }

    /// State in the neutral configuration: identity attitudes, everything else zero.
    pub fn default_state(&self) -> State {
        let mut state = State::new(self.nq, self.nv);
        for (i, joint) in self.joints.iter().enumerate() {
            let range = self.q_range(i);
            state.q.as_mut_slice()[range].copy_from_slice(&joint.joint_type.zero_position());
        }
        state
    }

    /// Check that `q` matches the per-joint position layout.
    pub fn check_q(&self, q: &[f64]) -> Result<()> {
        self.check_layout(Sequence::Q, q.len(), &self.q_offsets, |j| j.nq(), self.nq)
    }

    /// Check that `alpha` matches the per-joint DOF layout.
    pub fn check_alpha(&self, alpha: &[f64]) -> Result<()> {
        self.check_layout(Sequence::Alpha, alpha.len(), &self.v_offsets, |j| j.dof(), self.nv)
    }

    /// Check that `alpha_dot` matches the per-joint DOF layout.
    pub fn check_alpha_dot(&self, alpha_dot: &[f64]) -> Result<()> {
        self.check_layout(
            Sequence::AlphaDot,
            alpha_dot.len(),
            &self.v_offsets,
            |j| j.dof(),
            self.nv,
        )
    }

    /// Check all three buffers of `state`, in the order q, alpha, alpha_dot.
    pub fn check_state(&self, state: &State) -> Result<()> {
        self.check_q(state.q.as_slice())?;
        self.check_alpha(state.alpha.as_slice())?;
        self.check_alpha_dot(state.alpha_dot.as_slice())
    }

    fn check_layout(
        &self,
        sequence: Sequence,
        len: usize,
        offsets: &[usize],
        size: impl Fn(&Joint) -> usize,
        total: usize,
    ) -> Result<()> {
        for (i, (joint, &offset)) in self.joints.iter().zip(offsets).enumerate() {
            let expected = size(joint);
            if offset + expected > len {
                return Err(ModelError::DimensionMismatch {
                    sequence,
                    joint: Some(i),
                    expected,
                    actual: len.saturating_sub(offset),
                });
            }
        }
        if len != total {
            return Err(ModelError::DimensionMismatch {
                sequence,
                joint: None,
                expected: total,
                actual: len,
            });
        }
        Ok(())
    }
}

/// Builder for constructing models.
pub struct ModelBuilder {
    joints: Vec<Joint>,
}

impl ModelBuilder {
    /// Start building a new model.
    pub fn new() -> Self {
        Self { joints: Vec::new() }
    }

    /// Append a joint.
    pub fn add_joint(mut self, joint: Joint) -> Self {
        self.joints.push(joint);
        self
    }

    /// Append a joint of the given type.
    pub fn joint(self, name: &str, joint_type: JointType) -> Self {
        self.add_joint(Joint::new(name, joint_type))
    }

    /// Append a fixed joint (0 DOF).
    pub fn fixed(self, name: &str) -> Self {
        self.joint(name, JointType::Fixed)
    }

    /// Append a revolute joint.
    pub fn revolute(self, name: &str) -> Self {
        self.joint(name, JointType::Revolute)
    }

    /// Append a prismatic joint.
    pub fn prismatic(self, name: &str) -> Self {
        self.joint(name, JointType::Prismatic)
    }

    /// Append a spherical (ball) joint.
    pub fn spherical(self, name: &str) -> Self {
        self.joint(name, JointType::Spherical)
    }

    /// Append a free joint (6 DOF).
    pub fn free(self, name: &str) -> Self {
        self.joint(name, JointType::Free)
    }

    /// Append a planar joint.
    pub fn planar(self, name: &str) -> Self {
        self.joint(name, JointType::Planar)
    }

    /// Append a cylindrical joint.
    pub fn cylindrical(self, name: &str) -> Self {
        self.joint(name, JointType::Cylindrical)
    }

    /// Build the model.
    pub fn build(self) -> Model {
        let mut nq = 0;
        let mut nv = 0;
        let mut q_offsets = Vec::with_capacity(self.joints.len());
        let mut v_offsets = Vec::with_capacity(self.joints.len());

        for joint in &self.joints {
            q_offsets.push(nq);
            v_offsets.push(nv);
            nq += joint.nq();
            nv += joint.dof();
        }

        Model {
            joints: self.joints,
            nq,
            nv,
            q_offsets,
            v_offsets,
        }
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Model {
        ModelBuilder::new()
            .fixed("root")
            .free("base")
            .revolute("hip")
            .spherical("shoulder")
            .cylindrical("slider")
            .build()
    }

    #[test]
    fn offsets_follow_joint_layout() {
        let model = mixed();
        assert_eq!(model.njoints(), 5);
        assert_eq!(model.nq(), 7 + 1 + 4 + 2);
        assert_eq!(model.nv(), 6 + 1 + 3 + 2);
        assert_eq!(model.q_offsets(), &[0, 0, 7, 8, 12]);
        assert_eq!(model.v_offsets(), &[0, 0, 6, 7, 10]);
        assert_eq!(model.q_range(3), 8..12);
        assert_eq!(model.v_range(3), 7..10);
        assert!(model.q_range(0).is_empty());
    }

    #[test]
    fn default_state_is_neutral() {
        let model = mixed();
        let state = model.default_state();
        assert_eq!(state.q.len(), model.nq());
        assert_eq!(state.alpha.len(), model.nv());
        assert_eq!(state.alpha_dot.len(), model.nv());
        assert_eq!(state.q[0], 1.0);
        assert_eq!(state.q[8], 1.0);
        assert_eq!(state.q.iter().sum::<f64>(), 2.0);
        assert!(model.check_state(&state).is_ok());
    }

    #[test]
    fn short_buffer_reports_first_uncovered_joint() {
        let model = mixed();
        let alpha = vec![0.0; 8];
        let err = model.check_alpha(&alpha).unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                sequence: Sequence::Alpha,
                joint: Some(3),
                expected: 3,
                actual: 1,
            }
        );
    }

    #[test]
    fn long_buffer_reports_total() {
        let model = mixed();
        let q = vec![0.0; model.nq() + 2];
        let err = model.check_q(&q).unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                sequence: Sequence::Q,
                joint: None,
                expected: model.nq(),
                actual: model.nq() + 2,
            }
        );
    }

    #[test]
    fn check_state_reports_first_bad_sequence() {
        let model = ModelBuilder::new().revolute("j0").build();
        let mut state = model.default_state();
        state.alpha_dot = artik_math::DVec::zeros(0);
        let err = model.check_state(&state).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                sequence: Sequence::AlphaDot,
                joint: Some(0),
                ..
            }
        ));
    }

    #[test]
    fn empty_model_accepts_empty_buffers() {
        let model = ModelBuilder::new().build();
        assert_eq!(model.nq(), 0);
        assert!(model.check_state(&model.default_state()).is_ok());
        assert!(model.check_q(&[1.0]).is_err());
    }

    #[test]
    fn every_joint_has_an_offset() {
        let model = ModelBuilder::new()
            .revolute("a")
            .add_joint(Joint::new("tail", JointType::Spherical))
            .build();
        assert_eq!(model.q_offsets().len(), model.njoints());
        assert_eq!(model.v_offsets().len(), model.njoints());

        // a buffer sized for the first joint only is blamed on the appended one
        let err = model.check_q(&[0.0]).unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                sequence: Sequence::Q,
                joint: Some(1),
                expected: 4,
                actual: 0,
            }
        );
    }

    #[test]
    fn joint_names_by_index() {
        let model = mixed();
        assert_eq!(model.joint_name(0), Some("root"));
        assert_eq!(model.joint_name(3), Some("shoulder"));
        assert_eq!(model.joint_name(5), None);
        assert_eq!(model.joints()[2].joint_type, JointType::Revolute);
    }
}
