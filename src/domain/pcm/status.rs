//! Completeness status of a pairwise comparison matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many off-diagonal cells of a matrix are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PcmStatus {
    #[default]
    Empty,
    Incomplete,
    Complete,
}

impl PcmStatus {
    /// Derives the status from the number of filled off-diagonal cells of an
    /// n×n matrix.
    pub fn from_fill(filled_off_diagonal: usize, alternatives: usize) -> Self {
        let required = alternatives * alternatives.saturating_sub(1);
        if filled_off_diagonal == 0 {
            PcmStatus::Empty
        } else if filled_off_diagonal < required {
            PcmStatus::Incomplete
        } else {
            PcmStatus::Complete
        }
    }

    /// Returns true if every comparison is available.
    pub fn is_complete(&self) -> bool {
        matches!(self, PcmStatus::Complete)
    }

    /// Returns true if some but not all comparisons are available.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, PcmStatus::Incomplete)
    }

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PcmStatus::Empty => "empty",
            PcmStatus::Incomplete => "incomplete",
            PcmStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for PcmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PcmStatus::Empty => "Empty",
            PcmStatus::Incomplete => "Incomplete",
            PcmStatus::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert_eq!(PcmStatus::default(), PcmStatus::Empty);
    }

    #[test]
    fn from_fill_classifies_counts() {
        assert_eq!(PcmStatus::from_fill(0, 3), PcmStatus::Empty);
        assert_eq!(PcmStatus::from_fill(2, 3), PcmStatus::Incomplete);
        assert_eq!(PcmStatus::from_fill(6, 3), PcmStatus::Complete);
    }

    #[test]
    fn single_alternative_is_empty() {
        assert_eq!(PcmStatus::from_fill(0, 1), PcmStatus::Empty);
    }

    #[test]
    fn only_partial_fill_is_incomplete() {
        assert!(PcmStatus::from_fill(2, 3).is_incomplete());
        assert!(!PcmStatus::from_fill(0, 3).is_incomplete());
        assert!(!PcmStatus::from_fill(6, 3).is_incomplete());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&PcmStatus::Incomplete).unwrap();
        assert_eq!(json, "\"incomplete\"");
        assert_eq!(PcmStatus::Complete.as_str(), "complete");
    }

    #[test]
    fn displays_title_case() {
        assert_eq!(format!("{}", PcmStatus::Incomplete), "Incomplete");
    }
}
