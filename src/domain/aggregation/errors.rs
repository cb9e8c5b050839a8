//! Error types for group aggregation.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::scale::ScaleError;

/// Errors raised while combining expert matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregationError {
    #[error("No matrices to aggregate")]
    NoMatrices,

    #[error("Expert '{expert_id}' compares a different alternative list")]
    MismatchedAlternatives { expert_id: String },

    #[error(transparent)]
    Scale(#[from] ScaleError),
}

impl AggregationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AggregationError::NoMatrices => ErrorCode::NoMatrices,
            AggregationError::MismatchedAlternatives { .. } => ErrorCode::MismatchedAlternatives,
            AggregationError::Scale(inner) => inner.code(),
        }
    }
}
