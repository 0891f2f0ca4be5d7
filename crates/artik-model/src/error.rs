//! Error types for artik-model.

use std::fmt;

use thiserror::Error;

/// One of the three generalized-coordinate buffers of a [`State`](crate::State).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    /// Generalized positions.
    Q,
    /// Generalized velocities.
    Alpha,
    /// Generalized accelerations.
    AlphaDot,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sequence::Q => "q",
            Sequence::Alpha => "alpha",
            Sequence::AlphaDot => "alpha_dot",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A state buffer does not match the model's joint layout.
    ///
    /// `joint` is the first joint whose slice the buffer does not cover, with
    /// `expected`/`actual` its required and available lengths. `None` means
    /// every joint is covered but the buffer length differs from the layout
    /// total, given in `expected`.
    #[error(
        "dimension mismatch in `{sequence}` {}: expected {expected}, got {actual}",
        joint_label(.joint)
    )]
    DimensionMismatch {
        sequence: Sequence,
        joint: Option<usize>,
        expected: usize,
        actual: usize,
    },
}

fn joint_label(joint: &Option<usize>) -> String {
    match joint {
        Some(i) => format!("at joint {i}"),
        None => "total length".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
