//! Competence coefficient value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Trust placed in an expert, between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Competence(f64);

impl Competence {
    /// No trust at all; the expert's judgments carry zero weight.
    pub const NONE: Self = Self(0.0);

    /// Full trust. Used whenever a coefficient is not supplied.
    pub const FULL: Self = Self(1.0);

    /// Creates a new Competence, clamping to the valid range.
    ///
    /// Infinities clamp to the nearest bound. NaN carries no trust and
    /// yields [`Competence::NONE`] with a warning; use
    /// [`try_new`](Self::try_new) to reject it instead.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            tracing::warn!("Competence is NaN, treating the expert as untrusted");
            return Self::NONE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Competence, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("competence", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the coefficient.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Competence {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<f64> for Competence {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Competence> for f64 {
    fn from(competence: Competence) -> Self {
        competence.0
    }
}

impl fmt::Display for Competence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
