//! Error types for the group analysis pipeline.

use thiserror::Error;

use crate::domain::aggregation::AggregationError;
use crate::domain::consistency::ConsistencyError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::pcm::PcmError;
use crate::domain::scale::ScaleError;

/// Any failure while analysing a session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid session: {0}")]
    Validation(#[from] ValidationError),

    #[error("Expert '{expert_id}': {source}")]
    Judgment {
        expert_id: String,
        #[source]
        source: PcmError,
    },

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

impl AnalysisError {
    /// Attributes a matrix error to the expert whose input caused it.
    pub fn judgment(expert_id: impl Into<String>, source: PcmError) -> Self {
        AnalysisError::Judgment {
            expert_id: expert_id.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Validation(_) => ErrorCode::ValidationFailed,
            AnalysisError::Judgment { source, .. } => source.code(),
            AnalysisError::Scale(inner) => inner.code(),
            AnalysisError::Consistency(inner) => inner.code(),
            AnalysisError::Aggregation(inner) => inner.code(),
        }
    }
}
