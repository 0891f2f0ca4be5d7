//! artik: generalized-coordinate time integration for articulated mechanisms.
//!
//! This is the umbrella crate: it re-exports the model types, the math
//! primitives and the integrators from the sub-crates.
//!
//! ```
//! use artik::{ModelBuilder, State, safe_integrate};
//!
//! let model = ModelBuilder::new().revolute("elbow").build();
//! let mut state = State::from_vecs(vec![0.0], vec![1.0], vec![0.0]);
//! safe_integrate(&model, &mut state, 1.0).unwrap();
//! assert_eq!(state.q[0], 1.0);
//! ```

pub use artik_integrate::{
    self, EulerIntegrator, IntegrateError, Integrator, MagnusExpansion, SeriesOrder, Tolerance,
    free_translation_error_estimate, integrate, integrate_attitude, integrate_attitude_with,
    integrate_joint, magnus_expansion, safe_integrate,
};
pub use artik_math::{self, DVec, Quat, Vec3};
pub use artik_model::{self, Joint, JointType, Model, ModelBuilder, ModelError, Sequence, State};
