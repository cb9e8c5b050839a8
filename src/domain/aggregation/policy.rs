//! Informativeness assigned to cells no expert answered directly.

use serde::{Deserialize, Serialize};

use crate::domain::pcm::PairwiseComparisonMatrix;
use crate::domain::scale::ScaleError;

/// Bits credited to a transitively derived cell unless configured otherwise.
pub const DEFAULT_DERIVED_BITS: f64 = 1.0;

/// How a filled cell without an original judgment is weighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum DerivedInformativeness {
    /// A constant number of bits.
    Fixed { bits: f64 },
    /// The least informative answer the same expert gave, or `fallback_bits`
    /// if the expert gave none.
    WeakestOriginal { fallback_bits: f64 },
}

impl DerivedInformativeness {
    /// Informativeness to credit a derived cell of `pcm`.
    pub fn resolve(&self, pcm: &PairwiseComparisonMatrix) -> Result<f64, ScaleError> {
        match *self {
            DerivedInformativeness::Fixed { bits } => Ok(bits),
            DerivedInformativeness::WeakestOriginal { fallback_bits } => {
                let mut weakest: Option<f64> = None;
                for (_, original) in pcm.original_judgments() {
                    let bits = original.informativeness()?;
                    weakest = Some(weakest.map_or(bits, |current| current.min(bits)));
                }
                Ok(weakest.unwrap_or(fallback_bits))
            }
        }
    }
}

impl Default for DerivedInformativeness {
    fn default() -> Self {
        DerivedInformativeness::Fixed {
            bits: DEFAULT_DERIVED_BITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scale::Scale;

    #[test]
    fn default_is_one_fixed_bit() {
        let pcm = PairwiseComparisonMatrix::new(vec!["A", "B"], "e");
        assert_eq!(DerivedInformativeness::default().resolve(&pcm).unwrap(), 1.0);
    }

    #[test]
    fn weakest_original_takes_minimum_bits() {
        let mut pcm = PairwiseComparisonMatrix::new(vec!["A", "B", "C"], "e");
        pcm.add_judgment("A", "B", 3.0, Scale::Saaty9, 9).unwrap();
        pcm.add_judgment("B", "C", 2.0, Scale::Power, 4).unwrap();

        let policy = DerivedInformativeness::WeakestOriginal { fallback_bits: 1.0 };
        assert!((policy.resolve(&pcm).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn weakest_original_falls_back_without_answers() {
        let pcm = PairwiseComparisonMatrix::new(vec!["A", "B"], "e");
        let policy = DerivedInformativeness::WeakestOriginal { fallback_bits: 0.5 };
        assert_eq!(policy.resolve(&pcm).unwrap(), 0.5);
    }

    #[test]
    fn serializes_with_policy_tag() {
        let json = serde_json::to_value(DerivedInformativeness::default()).unwrap();
        assert_eq!(json["policy"], "fixed");
        assert_eq!(json["bits"], 1.0);
    }
}
