//! Analysis pipeline configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::aggregation::{DerivedInformativeness, DEFAULT_DERIVED_BITS};
use crate::domain::analysis::{AnalysisSettings, DEFAULT_SUGGESTION_COUNT};
use crate::domain::consistency::CONSISTENCY_THRESHOLD;

/// How transitively derived cells are weighted during aggregation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DerivedInformativenessMode {
    #[default]
    Fixed,
    WeakestOriginal,
}

/// Analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// CR below this value counts as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Maximum revision suggestions for an inconsistent group matrix
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,

    /// Complete connected partial matrices transitively
    #[serde(default = "default_fill_incomplete")]
    pub fill_incomplete: bool,

    /// Weighting policy for derived cells
    #[serde(default)]
    pub derived_informativeness: DerivedInformativenessMode,

    /// Bits credited to a derived cell (fallback for `weakest_original`)
    #[serde(default = "default_derived_informativeness_bits")]
    pub derived_informativeness_bits: f64,
}

impl AnalysisConfig {
    /// Pipeline settings described by this configuration
    pub fn settings(&self) -> AnalysisSettings {
        let bits = self.derived_informativeness_bits;
        let derived_informativeness = match self.derived_informativeness {
            DerivedInformativenessMode::Fixed => DerivedInformativeness::Fixed { bits },
            DerivedInformativenessMode::WeakestOriginal => {
                DerivedInformativeness::WeakestOriginal { fallback_bits: bits }
            }
        };
        AnalysisSettings {
            consistency_threshold: self.consistency_threshold,
            suggestion_count: self.suggestion_count,
            fill_incomplete: self.fill_incomplete,
            derived_informativeness,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.consistency_threshold > 0.0 && self.consistency_threshold <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(self.consistency_threshold));
        }
        if self.suggestion_count == 0 {
            return Err(ValidationError::InvalidSuggestionCount);
        }
        if !(self.derived_informativeness_bits > 0.0 && self.derived_informativeness_bits.is_finite()) {
            return Err(ValidationError::InvalidInformativenessBits(
                self.derived_informativeness_bits,
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            suggestion_count: default_suggestion_count(),
            fill_incomplete: default_fill_incomplete(),
            derived_informativeness: DerivedInformativenessMode::default(),
            derived_informativeness_bits: default_derived_informativeness_bits(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_suggestion_count() -> usize {
    DEFAULT_SUGGESTION_COUNT
}

fn default_fill_incomplete() -> bool {
    true
}

fn default_derived_informativeness_bits() -> f64 {
    DEFAULT_DERIVED_BITS
}
