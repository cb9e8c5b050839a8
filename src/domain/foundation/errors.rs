//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidJudgmentValue,
    UnknownAlternative,
    UnknownScale,

    // Scale errors
    GradationOutOfRange,
    IndexOutOfRange,
    InvalidGradationCount,

    // Matrix errors
    SelfComparison,
    DegenerateReciprocal,
    EmptyMatrix,
    NotSquare,
    DecompositionFailed,

    // Aggregation errors
    MismatchedAlternatives,
    NoMatrices,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidJudgmentValue => "INVALID_JUDGMENT_VALUE",
            ErrorCode::UnknownAlternative => "UNKNOWN_ALTERNATIVE",
            ErrorCode::UnknownScale => "UNKNOWN_SCALE",
            ErrorCode::GradationOutOfRange => "GRADATION_OUT_OF_RANGE",
            ErrorCode::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            ErrorCode::InvalidGradationCount => "INVALID_GRADATION_COUNT",
            ErrorCode::SelfComparison => "SELF_COMPARISON",
            ErrorCode::DegenerateReciprocal => "DEGENERATE_RECIPROCAL",
            ErrorCode::EmptyMatrix => "EMPTY_MATRIX",
            ErrorCode::NotSquare => "NOT_SQUARE",
            ErrorCode::DecompositionFailed => "DECOMPOSITION_FAILED",
            ErrorCode::MismatchedAlternatives => "MISMATCHED_ALTERNATIVES",
            ErrorCode::NoMatrices => "NO_MATRICES",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("expert_id");
        assert_eq!(format!("{}", err), "Field 'expert_id' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("competence", 0.0, 1.0, 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'competence' must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("matrix", "row 2 has 3 columns");
        assert_eq!(
            format!("{}", err),
            "Field 'matrix' has invalid format: row 2 has 3 columns"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::SelfComparison), "SELF_COMPARISON");
        assert_eq!(
            format!("{}", ErrorCode::MismatchedAlternatives),
            "MISMATCHED_ALTERNATIVES"
        );
        assert_eq!(format!("{}", ErrorCode::NoMatrices), "NO_MATRICES");
    }
}
