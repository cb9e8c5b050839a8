//! The closed set of rating scales experts may answer on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::formulas::{
    BalancedFormula, DoneganFormula, MaZhengFormula, OrdinalFormula, PowerFormula, Saaty9Formula,
};
use super::ScaleError;

/// Generator of the numeric grades of one scale.
///
/// Implementors are stateless; `generate` is only called with a gradation
/// count inside `gradation_range`.
pub trait ScaleFormula: Send + Sync {
    /// Inclusive (min, max) number of gradations the scale supports.
    fn gradation_range(&self) -> (usize, usize);

    /// Ascending grade values in [1, 9].
    fn generate(&self, gradations: usize) -> Vec<f64>;
}

/// A rating scale identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scale {
    #[serde(rename = "ordinal")]
    Ordinal,
    #[serde(rename = "saaty_9")]
    Saaty9,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "power")]
    Power,
    #[serde(rename = "ma_zheng")]
    MaZheng,
    #[serde(rename = "donegan")]
    Donegan,
}

static ORDINAL: OrdinalFormula = OrdinalFormula;
static SAATY_9: Saaty9Formula = Saaty9Formula;
static BALANCED: BalancedFormula = BalancedFormula;
static POWER: PowerFormula = PowerFormula;
static MA_ZHENG: MaZhengFormula = MaZhengFormula;
static DONEGAN: DoneganFormula = DoneganFormula;

impl Scale {
    /// Every scale, in declaration order.
    pub const ALL: [Scale; 6] = [
        Scale::Ordinal,
        Scale::Saaty9,
        Scale::Balanced,
        Scale::Power,
        Scale::MaZheng,
        Scale::Donegan,
    ];

    /// Returns the formula that owns this scale's grade values.
    pub fn formula(&self) -> &'static dyn ScaleFormula {
        match self {
            Scale::Ordinal => &ORDINAL,
            Scale::Saaty9 => &SAATY_9,
            Scale::Balanced => &BALANCED,
            Scale::Power => &POWER,
            Scale::MaZheng => &MA_ZHENG,
            Scale::Donegan => &DONEGAN,
        }
    }

    /// Returns the wire identifier.
    pub fn identifier(&self) -> &'static str {
        match self {
            Scale::Ordinal => "ordinal",
            Scale::Saaty9 => "saaty_9",
            Scale::Balanced => "balanced",
            Scale::Power => "power",
            Scale::MaZheng => "ma_zheng",
            Scale::Donegan => "donegan",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Scale::Ordinal => "Ordinal",
            Scale::Saaty9 => "Saaty-9",
            Scale::Balanced => "Balanced",
            Scale::Power => "Power",
            Scale::MaZheng => "Ma-Zheng",
            Scale::Donegan => "Donegan",
        }
    }

    /// Inclusive (min, max) gradation counts.
    pub fn gradation_range(&self) -> (usize, usize) {
        self.formula().gradation_range()
    }

    /// Returns true if the scale can be used with `gradations` grades.
    pub fn supports(&self, gradations: usize) -> bool {
        let (min, max) = self.gradation_range();
        (min..=max).contains(&gradations)
    }

    /// Ascending grade values for `gradations` grades.
    ///
    /// # Errors
    /// `GradationOutOfRange` when the count is outside [`Scale::gradation_range`].
    pub fn values(&self, gradations: usize) -> Result<Vec<f64>, ScaleError> {
        let (min, max) = self.gradation_range();
        if !self.supports(gradations) {
            return Err(ScaleError::GradationOutOfRange {
                scale: *self,
                min,
                max,
                actual: gradations,
            });
        }
        Ok(self.formula().generate(gradations))
    }
}

impl FromStr for Scale {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::ALL
            .iter()
            .copied()
            .find(|scale| scale.identifier() == s)
            .ok_or_else(|| ScaleError::UnknownScale(s.to_string()))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_is_fixed_at_extremes() {
        assert_eq!(Scale::Ordinal.values(2).unwrap(), vec![1.0, 9.0]);
    }

    #[test]
    fn ordinal_rejects_any_other_count() {
        assert!(matches!(
            Scale::Ordinal.values(3),
            Err(ScaleError::GradationOutOfRange { min: 2, max: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn values_rejects_counts_outside_range() {
        assert!(Scale::Saaty9.values(2).is_err());
        assert!(Scale::Balanced.values(10).is_err());
        assert!(Scale::Donegan.values(0).is_err());
    }

    #[test]
    fn gradation_ranges_match_scale_families() {
        assert_eq!(Scale::Ordinal.gradation_range(), (2, 2));
        for scale in &Scale::ALL[1..] {
            assert_eq!(scale.gradation_range(), (3, 9));
        }
    }

    #[test]
    fn every_supported_count_yields_ascending_values_in_range() {
        for scale in Scale::ALL {
            let (min, max) = scale.gradation_range();
            for n in min..=max {
                let values = scale.values(n).unwrap();
                assert_eq!(values.len(), n, "{} with {} gradations", scale, n);
                assert!(values.windows(2).all(|w| w[0] <= w[1]), "{} not ascending", scale);
                assert!(values.iter().all(|v| (1.0..=9.0).contains(v)));
            }
        }
    }

    #[test]
    fn identifier_round_trips_through_from_str() {
        for scale in Scale::ALL {
            assert_eq!(scale.identifier().parse::<Scale>().unwrap(), scale);
        }
    }

    #[test]
    fn from_str_rejects_unknown_identifier() {
        assert_eq!(
            "saaty_5".parse::<Scale>(),
            Err(ScaleError::UnknownScale("saaty_5".to_string()))
        );
    }

    #[test]
    fn serde_uses_snake_case_identifiers() {
        assert_eq!(serde_json::to_string(&Scale::Saaty9).unwrap(), "\"saaty_9\"");
        assert_eq!(serde_json::to_string(&Scale::MaZheng).unwrap(), "\"ma_zheng\"");
        let scale: Scale = serde_json::from_str("\"donegan\"").unwrap();
        assert_eq!(scale, Scale::Donegan);
    }

    #[test]
    fn display_uses_identifier() {
        assert_eq!(format!("{}", Scale::Balanced), "balanced");
        assert_eq!(Scale::Saaty9.label(), "Saaty-9");
    }
}
