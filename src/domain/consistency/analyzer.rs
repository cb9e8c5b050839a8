//! Consistency ratio and priority weights of a reciprocal matrix.

use serde::{Deserialize, Serialize};

use super::eigen::{ensure_square, principal_eigenvalue, principal_eigenvector};
use super::ConsistencyError;
use crate::domain::foundation::SquareMatrix;

/// A matrix is accepted as consistent when CR is below this value.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty's random index for n = 1..=15.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Random index used beyond the table.
pub const RANDOM_INDEX_FALLBACK: f64 = 1.49;

/// Spectral consistency figures of one matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub n: usize,
    #[serde(rename = "CI")]
    pub consistency_index: f64,
    #[serde(rename = "CR")]
    pub consistency_ratio: f64,
    #[serde(rename = "RI")]
    pub random_index: f64,
    pub is_consistent: bool,
    pub threshold: f64,
}

/// Stateless analysis of square reciprocal matrices.
pub struct ConsistencyAnalyzer;

impl ConsistencyAnalyzer {
    /// Principal eigenvalue (largest real part).
    pub fn lambda_max(matrix: &SquareMatrix) -> Result<f64, ConsistencyError> {
        principal_eigenvalue(matrix)
    }

    /// CI = (λmax - n) / (n - 1); zero for n ≤ 1.
    pub fn consistency_index(matrix: &SquareMatrix) -> Result<f64, ConsistencyError> {
        let n = ensure_square(matrix)?;
        if n <= 1 {
            return Ok(0.0);
        }
        let lambda = principal_eigenvalue(matrix)?;
        Ok((lambda - n as f64) / (n - 1) as f64)
    }

    /// Random index for an n×n matrix.
    pub fn random_index(n: usize) -> f64 {
        match n {
            0 => 0.0,
            n if n <= RANDOM_INDEX.len() => RANDOM_INDEX[n - 1],
            _ => RANDOM_INDEX_FALLBACK,
        }
    }

    /// CR = CI / RI; zero for n ≤ 2 or when RI is zero.
    pub fn consistency_ratio(matrix: &SquareMatrix) -> Result<f64, ConsistencyError> {
        let n = ensure_square(matrix)?;
        if n <= 2 {
            return Ok(0.0);
        }
        let ri = Self::random_index(n);
        if ri == 0.0 {
            return Ok(0.0);
        }
        Ok(Self::consistency_index(matrix)? / ri)
    }

    /// Full report against [`CONSISTENCY_THRESHOLD`].
    pub fn report(matrix: &SquareMatrix) -> Result<ConsistencyReport, ConsistencyError> {
        Self::report_with_threshold(matrix, CONSISTENCY_THRESHOLD)
    }

    /// Full report; consistent when CR < `threshold`.
    pub fn report_with_threshold(
        matrix: &SquareMatrix,
        threshold: f64,
    ) -> Result<ConsistencyReport, ConsistencyError> {
        let n = ensure_square(matrix)?;
        let lambda_max = principal_eigenvalue(matrix)?;
        let consistency_index = Self::consistency_index(matrix)?;
        let consistency_ratio = Self::consistency_ratio(matrix)?;

        Ok(ConsistencyReport {
            lambda_max,
            n,
            consistency_index,
            consistency_ratio,
            random_index: Self::random_index(n),
            is_consistent: consistency_ratio < threshold,
            threshold,
        })
    }

    /// Priority weights from the principal eigenvector.
    ///
    /// The real eigenvector is scaled to sum 1, then absolute values are taken
    /// and renormalised so the arbitrary sign of the solver cannot leak out.
    pub fn weights_eigenvector(matrix: &SquareMatrix) -> Result<Vec<f64>, ConsistencyError> {
        let vector = principal_eigenvector(matrix)?;
        let sum: f64 = vector.iter().sum();
        let scaled: Vec<f64> = if sum != 0.0 {
            vector.iter().map(|x| x / sum).collect()
        } else {
            vector.iter().copied().collect()
        };
        Ok(normalize(scaled.into_iter().map(f64::abs).collect()))
    }

    /// Priority weights from row geometric means.
    pub fn weights_geometric_mean(matrix: &SquareMatrix) -> Result<Vec<f64>, ConsistencyError> {
        let n = ensure_square(matrix)?;
        if n == 0 {
            return Err(ConsistencyError::EmptyMatrix);
        }
        let means = matrix
            .row_iter()
            .map(|row| row.iter().product::<f64>().powf(1.0 / n as f64))
            .collect();
        Ok(normalize(means))
    }

    /// Perfectly consistent matrix implied by `weights`: cell (i, j) = wᵢ / wⱼ,
    /// or 1 where wⱼ is zero.
    pub fn ideal_pcm(weights: &[f64]) -> SquareMatrix {
        let n = weights.len();
        SquareMatrix::from_fn(n, n, |i, j| {
            if weights[j] != 0.0 {
                weights[i] / weights[j]
            } else {
                1.0
            }
        })
    }
}

/// Scales to sum 1; uniform when the sum is not positive.
pub(crate) fn normalize(values: Vec<f64>) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total > 0.0 {
        values.into_iter().map(|v| v / total).collect()
    } else if values.is_empty() {
        values
    } else {
        tracing::warn!(len = values.len(), "Weights sum to zero, falling back to uniform");
        let uniform = 1.0 / values.len() as f64;
        vec![uniform; values.len()]
    }
}
