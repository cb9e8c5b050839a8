//! Error types for consistency analysis.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors raised by matrix analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("Matrix has no rows")]
    EmptyMatrix,

    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("{0} decomposition did not converge")]
    DecompositionFailed(&'static str),

    #[error("Expected {expected} alternative names, got {actual}")]
    AlternativeCountMismatch { expected: usize, actual: usize },
}

impl ConsistencyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConsistencyError::EmptyMatrix => ErrorCode::EmptyMatrix,
            ConsistencyError::NotSquare { .. } => ErrorCode::NotSquare,
            ConsistencyError::DecompositionFailed(_) => ErrorCode::DecompositionFailed,
            ConsistencyError::AlternativeCountMismatch { .. } => ErrorCode::ValidationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_square_displays_dimensions() {
        let err = ConsistencyError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(format!("{}", err), "Matrix must be square, got 2x3");
        assert_eq!(err.code(), ErrorCode::NotSquare);
    }

    #[test]
    fn decomposition_failure_names_the_step() {
        let err = ConsistencyError::DecompositionFailed("Schur");
        assert_eq!(format!("{}", err), "Schur decomposition did not converge");
    }
}
