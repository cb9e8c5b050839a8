//! One expert's pairwise comparison matrix.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{JudgmentRecord, OriginalJudgment, PcmError, PcmStatus};
use crate::domain::foundation::matrix::rows;
use crate::domain::foundation::SquareMatrix;
use crate::domain::scale::{unify_judgment, Scale};

/// Lower bound of a transitively derived comparison.
const MIN_DERIVED: f64 = 1.0 / 9.0;
/// Upper bound of a transitively derived comparison.
const MAX_DERIVED: f64 = 9.0;

/// Reciprocal judgment matrix owned by a single expert.
///
/// The unified matrix and its fill mask are only mutated through
/// [`add_judgment`](Self::add_judgment) and
/// [`fill_transitive`](Self::fill_transitive), both of which write a cell and
/// its reciprocal together: whenever `(i, j)` is filled, `(j, i)` is filled
/// and holds `1 / unified[i, j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseComparisonMatrix {
    expert_id: String,
    alternatives: Vec<String>,
    unified: SquareMatrix,
    filled: DMatrix<bool>,
    originals: BTreeMap<(usize, usize), OriginalJudgment>,
}

impl PairwiseComparisonMatrix {
    /// Creates an empty matrix: ones everywhere, only the diagonal filled.
    pub fn new(alternatives: Vec<impl Into<String>>, expert_id: impl Into<String>) -> Self {
        let alternatives: Vec<String> = alternatives.into_iter().map(Into::into).collect();
        let n = alternatives.len();
        Self {
            expert_id: expert_id.into(),
            alternatives,
            unified: DMatrix::from_element(n, n, 1.0),
            filled: DMatrix::from_fn(n, n, |i, j| i == j),
            originals: BTreeMap::new(),
        }
    }

    /// Constructs a matrix and replays `judgments` through
    /// [`add_judgment`](Self::add_judgment), stopping at the first failure.
    pub fn build(
        alternatives: Vec<impl Into<String>>,
        judgments: &[JudgmentRecord],
        expert_id: impl Into<String>,
    ) -> Result<Self, PcmError> {
        let mut pcm = Self::new(alternatives, expert_id);
        for judgment in judgments {
            pcm.add(judgment)?;
        }
        Ok(pcm)
    }

    pub fn expert_id(&self) -> &str {
        &self.expert_id
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// The unified (cardinal) matrix.
    pub fn unified(&self) -> &SquareMatrix {
        &self.unified
    }

    /// Unified value of cell `(i, j)`.
    ///
    /// # Panics
    /// If `i` or `j` is not below [`len`](Self::len). See [`get`](Self::get).
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.unified[(i, j)]
    }

    /// Unified value of cell `(i, j)`, or `None` outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.unified.get((i, j)).copied()
    }

    /// # Panics
    /// If `i` or `j` is not below [`len`](Self::len). See [`get_filled`](Self::get_filled).
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        self.filled[(i, j)]
    }

    /// Fill flag of cell `(i, j)`, or `None` outside the matrix.
    pub fn get_filled(&self, i: usize, j: usize) -> Option<bool> {
        self.filled.get((i, j)).copied()
    }

    /// Scale metadata of an answered cell; `None` for empty or derived cells.
    pub fn original_judgment(&self, i: usize, j: usize) -> Option<&OriginalJudgment> {
        self.originals.get(&(i, j))
    }

    /// All answered cells, reciprocals included, in row-major order.
    pub fn original_judgments(&self) -> impl Iterator<Item = ((usize, usize), &OriginalJudgment)> {
        self.originals.iter().map(|(cell, original)| (*cell, original))
    }

    /// Number of answered pairs, counting each judgment once.
    pub fn judgment_count(&self) -> usize {
        self.originals.keys().filter(|(i, j)| i < j).count()
    }

    /// Index of an alternative by name.
    pub fn index_of(&self, alternative: &str) -> Result<usize, PcmError> {
        self.alternatives
            .iter()
            .position(|name| name == alternative)
            .ok_or_else(|| PcmError::UnknownAlternative(alternative.to_string()))
    }

    /// Records a judgment from a wire record.
    pub fn add(&mut self, record: &JudgmentRecord) -> Result<(), PcmError> {
        self.add_judgment(
            &record.alt_i,
            &record.alt_j,
            record.value,
            record.scale,
            record.gradations,
        )
    }

    /// Unifies `value` and records it at `(alt_i, alt_j)` together with its
    /// reciprocal at `(alt_j, alt_i)`.
    ///
    /// Every check runs before the matrix is touched, so a failed call leaves
    /// it unchanged.
    ///
    /// # Errors
    /// - `UnknownAlternative` if either name is not in the matrix
    /// - `SelfComparison` if both names refer to the same alternative
    /// - `InvalidJudgmentValue` unless `value` is finite and positive
    /// - `Scale` if `gradations` is outside the scale's range
    /// - `DegenerateReciprocal` if the unified value is zero
    pub fn add_judgment(
        &mut self,
        alt_i: &str,
        alt_j: &str,
        value: f64,
        scale: Scale,
        gradations: usize,
    ) -> Result<(), PcmError> {
        let i = self.index_of(alt_i)?;
        let j = self.index_of(alt_j)?;
        if i == j {
            return Err(PcmError::SelfComparison(alt_i.to_string()));
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(PcmError::InvalidJudgmentValue(value));
        }

        let unified = f64::from(unify_judgment(scale, gradations, value, false)?);
        if unified == 0.0 {
            return Err(PcmError::DegenerateReciprocal {
                alt_i: alt_i.to_string(),
                alt_j: alt_j.to_string(),
            });
        }

        tracing::debug!(
            expert = %self.expert_id,
            alt_i,
            alt_j,
            value,
            %scale,
            gradations,
            unified,
            "Recorded judgment"
        );

        self.set_pair(i, j, unified);
        self.originals.insert(
            (i, j),
            OriginalJudgment {
                scale,
                gradations,
                value,
            },
        );
        self.originals.insert(
            (j, i),
            OriginalJudgment {
                scale,
                gradations,
                value: 1.0 / value,
            },
        );
        Ok(())
    }

    /// Completeness derived from the fill mask.
    pub fn status(&self) -> PcmStatus {
        PcmStatus::from_fill(self.filled_pairs().len(), self.len())
    }

    /// Returns true if every alternative is reachable from the first one
    /// through filled comparisons.
    ///
    /// A disconnected incomplete matrix cannot be completed transitively.
    pub fn check_connectivity(&self) -> bool {
        let n = self.len();
        if n == 0 {
            return true;
        }

        let mut visited = vec![false; n];
        let mut stack = vec![0];
        visited[0] = true;
        while let Some(node) = stack.pop() {
            for neighbour in 0..n {
                if neighbour != node && self.filled[(node, neighbour)] && !visited[neighbour] {
                    visited[neighbour] = true;
                    stack.push(neighbour);
                }
            }
        }
        visited.into_iter().all(|seen| seen)
    }

    /// Unordered pairs `(alt_i, alt_j)`, i < j, still lacking a comparison.
    pub fn missing_comparisons(&self) -> Vec<(String, String)> {
        let n = self.len();
        let mut missing = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if !self.filled[(i, j)] {
                    missing.push((self.alternatives[i].clone(), self.alternatives[j].clone()));
                }
            }
        }
        missing
    }

    /// Filled off-diagonal cells in row-major order.
    pub fn filled_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if i != j && self.filled[(i, j)] {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Derives missing comparisons from chains `i -> k -> j`.
    ///
    /// Each scan visits unfilled `(i, j)` in row-major order and takes the
    /// first intermediate `k` with both `(i, k)` and `(k, j)` filled, setting
    /// `unified[i, j] = clamp(unified[i, k] * unified[k, j], 1/9, 9)` and its
    /// reciprocal. Cells filled earlier in the same scan are visible to later
    /// ones, so the result depends on traversal order. Scans repeat until one
    /// makes no progress or n² scans have run.
    ///
    /// Derived cells get no [`OriginalJudgment`]. Returns the number of
    /// comparisons derived; each fills a cell and its reciprocal.
    pub fn fill_transitive(&mut self) -> usize {
        let n = self.len();
        let max_scans = n * n;
        let mut derived = 0;

        for scan in 0..max_scans {
            let mut progress = false;
            for i in 0..n {
                for j in 0..n {
                    if i == j || self.filled[(i, j)] {
                        continue;
                    }
                    let via = (0..n).find(|&k| {
                        k != i && k != j && self.filled[(i, k)] && self.filled[(k, j)]
                    });
                    if let Some(k) = via {
                        let product = self.unified[(i, k)] * self.unified[(k, j)];
                        self.set_pair(i, j, product.clamp(MIN_DERIVED, MAX_DERIVED));
                        derived += 1;
                        progress = true;
                    }
                }
            }
            tracing::debug!(expert = %self.expert_id, scan, derived, "Transitive fill scan");
            if !progress {
                break;
            }
        }

        derived
    }

    /// Serializable summary of the matrix.
    pub fn snapshot(&self) -> PcmSnapshot {
        PcmSnapshot {
            expert_id: self.expert_id.clone(),
            alternatives: self.alternatives.clone(),
            unified_matrix: self.unified.clone(),
            filled_mask: self.filled.clone(),
            status: self.status(),
            judgment_count: self.judgment_count(),
            is_connected: self.check_connectivity(),
        }
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.unified[(i, j)] = value;
        self.unified[(j, i)] = 1.0 / value;
        self.filled[(i, j)] = true;
        self.filled[(j, i)] = true;
    }
}

/// Point-in-time view of a [`PairwiseComparisonMatrix`] for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcmSnapshot {
    pub expert_id: String,
    pub alternatives: Vec<String>,
    #[serde(with = "rows")]
    pub unified_matrix: SquareMatrix,
    #[serde(with = "rows")]
    pub filled_mask: DMatrix<bool>,
    pub status: PcmStatus,
    pub judgment_count: usize,
    pub is_connected: bool,
}
