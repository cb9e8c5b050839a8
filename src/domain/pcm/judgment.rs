//! Judgment records exchanged with collaborators and kept per filled cell.

use serde::{Deserialize, Serialize};

use crate::domain::scale::{informativeness, Scale, ScaleError};

/// One expert's rating of an ordered alternative pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    pub alt_i: String,
    pub alt_j: String,
    /// Raw value on the chosen scale.
    pub value: f64,
    #[serde(alias = "scale_type")]
    pub scale: Scale,
    #[serde(alias = "n_gradations")]
    pub gradations: usize,
}

impl JudgmentRecord {
    /// Creates a new judgment record.
    pub fn new(
        alt_i: impl Into<String>,
        alt_j: impl Into<String>,
        value: f64,
        scale: Scale,
        gradations: usize,
    ) -> Self {
        Self {
            alt_i: alt_i.into(),
            alt_j: alt_j.into(),
            value,
            scale,
            gradations,
        }
    }
}

/// Scale metadata remembered for a cell filled from an expert's answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginalJudgment {
    pub scale: Scale,
    pub gradations: usize,
    /// Raw value; the reciprocal cell stores 1/value.
    pub value: f64,
}

impl OriginalJudgment {
    /// Hartley informativeness of the scale the answer was given on.
    pub fn informativeness(&self) -> Result<f64, ScaleError> {
        informativeness(self.gradations)
    }
}
