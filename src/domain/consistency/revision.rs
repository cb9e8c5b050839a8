//! Revision suggestions for inconsistent matrices and weight ranking.

use serde::{Deserialize, Serialize};

use super::{ConsistencyAnalyzer, ConsistencyError};
use crate::domain::foundation::SquareMatrix;

/// A comparison whose value strays furthest from the consistent ideal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionSuggestion {
    /// "alt_i vs alt_j".
    pub comparison: String,
    pub alt_i: String,
    pub alt_j: String,
    pub current_value: f64,
    /// Value the ideal matrix holds for this cell.
    pub suggested_value: f64,
    pub deviation_percent: f64,
    pub message: String,
}

/// One alternative's place in a priority ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based.
    pub rank: usize,
    pub alternative: String,
    pub weight: f64,
}

/// Up to `top_k` upper-triangle cells ranked by relative deviation from the
/// ideal matrix built on the eigenvector weights.
///
/// Deviation is `|current - ideal| / ideal`, or the absolute difference when
/// the ideal is zero. Ties keep row-major order.
pub fn generate_revision_suggestions<S: AsRef<str>>(
    matrix: &SquareMatrix,
    alternatives: &[S],
    top_k: usize,
) -> Result<Vec<RevisionSuggestion>, ConsistencyError> {
    let n = matrix.nrows();
    if alternatives.len() != n {
        return Err(ConsistencyError::AlternativeCountMismatch {
            expected: n,
            actual: alternatives.len(),
        });
    }

    let weights = ConsistencyAnalyzer::weights_eigenvector(matrix)?;
    let ideal = ConsistencyAnalyzer::ideal_pcm(&weights);

    let mut deviations = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let current = matrix[(i, j)];
            let target = ideal[(i, j)];
            let deviation = if target != 0.0 {
                (current - target).abs() / target
            } else {
                (current - target).abs()
            };
            deviations.push((i, j, current, target, deviation));
        }
    }
    deviations.sort_by(|a, b| b.4.total_cmp(&a.4));

    let suggestions: Vec<RevisionSuggestion> = deviations
        .into_iter()
        .take(top_k)
        .map(|(i, j, current, target, deviation)| {
            let alt_i = alternatives[i].as_ref().to_string();
            let alt_j = alternatives[j].as_ref().to_string();
            let deviation_percent = deviation * 100.0;
            RevisionSuggestion {
                comparison: format!("{} vs {}", alt_i, alt_j),
                message: format!(
                    "Consider revising '{}' vs '{}'. Current value: {:.2}, ideal value: {:.2} (deviation {:.1}%)",
                    alt_i, alt_j, current, target, deviation_percent
                ),
                alt_i,
                alt_j,
                current_value: current,
                suggested_value: target,
                deviation_percent,
            }
        })
        .collect();

    tracing::debug!(count = suggestions.len(), top_k, "Generated revision suggestions");
    Ok(suggestions)
}

/// Alternatives sorted by descending weight; equal weights keep input order.
///
/// # Errors
/// `AlternativeCountMismatch` unless there is one name per weight.
pub fn rank_weights<S: AsRef<str>>(
    weights: &[f64],
    alternatives: &[S],
) -> Result<Vec<RankedAlternative>, ConsistencyError> {
    if alternatives.len() != weights.len() {
        return Err(ConsistencyError::AlternativeCountMismatch {
            expected: weights.len(),
            actual: alternatives.len(),
        });
    }

    let mut items: Vec<(String, f64)> = alternatives
        .iter()
        .zip(weights)
        .map(|(alternative, weight)| (alternative.as_ref().to_string(), *weight))
        .collect();
    items.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, (alternative, weight))| RankedAlternative {
            rank: index + 1,
            alternative,
            weight,
        })
        .collect())
}
