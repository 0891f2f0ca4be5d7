//! Model and state types for the artik integrator.
//!
//! `Model` is the static description of a mechanism (ordered joints and their
//! coordinate layout). `State` holds the generalized positions, velocities
//! and accelerations that the integrator reads and updates.

pub mod error;
pub mod joint;
pub mod model;
pub mod state;

pub use error::{ModelError, Result, Sequence};
pub use joint::{Joint, JointType};
pub use model::{Model, ModelBuilder};
pub use state::State;
