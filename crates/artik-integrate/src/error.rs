//! Error types for artik-integrate.
//!
//! Stepping itself only fails on a state/model layout mismatch, reported as
//! [`ModelError`](artik_model::ModelError). The errors here come from
//! building an integrator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrateError {
    #[error("invalid tolerance: {reason}")]
    InvalidTolerance { reason: String },
}

impl IntegrateError {
    /// Create an invalid tolerance error.
    pub fn invalid_tolerance(reason: impl Into<String>) -> Self {
        Self::InvalidTolerance {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IntegrateError>;
