//! Euler integration of generalized positions for articulated mechanisms.
//!
//! Implements:
//! - Truncated Magnus expansion for constant angular acceleration
//! - Attitude integration on SO(3)
//! - Per-joint position updates
//! - Mechanism-wide Euler step, unchecked and validated
//! - Error estimate for the free-joint translation

pub mod config;
pub mod error;
pub mod estimate;
pub mod euler;
pub mod joint;
pub mod magnus;
pub mod so3;

pub use config::Tolerance;
pub use error::{IntegrateError, Result};
pub use estimate::{fourth_derivative_squared_norm, free_translation_error_estimate};
pub use euler::{EulerIntegrator, Integrator, integrate, safe_integrate};
pub use joint::integrate_joint;
pub use magnus::{MagnusExpansion, SeriesOrder, magnus_expansion};
pub use so3::{integrate_attitude, integrate_attitude_with};
