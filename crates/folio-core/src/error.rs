use thiserror::Error;

use crate::shapes::Shape;

/// Failures surfaced by the core. None of them is fatal to the frame loop:
/// the caller logs them and keeps drawing the last good frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisualError {
    /// Invalid tuning value (non-positive morph duration, zero particles, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No generated positions are available for the target shape.
    #[error("data error: no positions for shape {shape}")]
    MissingShape { shape: Shape },

    /// Target positions do not line up with the particle buffers.
    #[error("data error: shape {shape} has {actual} points, expected {expected}")]
    SizeMismatch {
        shape: Shape,
        expected: usize,
        actual: usize,
    },
}

impl VisualError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, VisualError::Configuration(_))
    }

    pub fn is_data(&self) -> bool {
        matches!(
            self,
            VisualError::MissingShape { .. } | VisualError::SizeMismatch { .. }
        )
    }
}

pub type VisualResult<T> = Result<T, VisualError>;
