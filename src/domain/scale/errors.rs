//! Error types for rating scales.

use thiserror::Error;

use super::Scale;
use crate::domain::foundation::ErrorCode;

/// Errors raised while generating or unifying scale values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("Scale {scale} supports {min}-{max} gradations, got {actual}")]
    GradationOutOfRange {
        scale: Scale,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Grade index {index} outside [1, {gradations}]")]
    IndexOutOfRange { index: usize, gradations: usize },

    #[error("Gradation count must be at least 2, got {0}")]
    InvalidGradationCount(usize),

    #[error("Unknown scale identifier '{0}'")]
    UnknownScale(String),
}

impl ScaleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScaleError::GradationOutOfRange { .. } => ErrorCode::GradationOutOfRange,
            ScaleError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            ScaleError::InvalidGradationCount(_) => ErrorCode::InvalidGradationCount,
            ScaleError::UnknownScale(_) => ErrorCode::UnknownScale,
        }
    }
}
