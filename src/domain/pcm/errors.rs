//! Error types for pairwise comparison matrices.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::scale::ScaleError;

/// Errors that can occur while recording judgments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PcmError {
    #[error("Cannot compare alternative '{0}' with itself")]
    SelfComparison(String),

    #[error("Unknown alternative '{0}'")]
    UnknownAlternative(String),

    #[error("Judgment value must be finite and positive, got {0}")]
    InvalidJudgmentValue(f64),

    #[error("Unified value of '{alt_i}' vs '{alt_j}' is zero; reciprocal undefined")]
    DegenerateReciprocal { alt_i: String, alt_j: String },

    #[error(transparent)]
    Scale(#[from] ScaleError),
}

impl PcmError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PcmError::SelfComparison(_) => ErrorCode::SelfComparison,
            PcmError::UnknownAlternative(_) => ErrorCode::UnknownAlternative,
            PcmError::InvalidJudgmentValue(_) => ErrorCode::InvalidJudgmentValue,
            PcmError::DegenerateReciprocal { .. } => ErrorCode::DegenerateReciprocal,
            PcmError::Scale(inner) => inner.code(),
        }
    }
}
