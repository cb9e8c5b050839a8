//! Weighted geometric-mean aggregation of expert matrices.

use std::collections::{BTreeMap, HashMap};

use super::{AggregationError, AggregationResult, DerivedInformativeness, ExpertStatistics};
use crate::domain::foundation::{Competence, SquareMatrix};
use crate::domain::pcm::PairwiseComparisonMatrix;

/// Competence coefficients keyed by expert id.
pub type CompetenceMap = HashMap<String, Competence>;

/// Combines several experts' matrices into one group matrix.
///
/// Each filled cell contributes with weight
/// `informativeness × competence`, where informativeness comes from the
/// scale the expert answered on, or from the [`DerivedInformativeness`]
/// policy for transitively filled cells.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupAggregator {
    derived: DerivedInformativeness,
}

impl GroupAggregator {
    pub fn new(derived: DerivedInformativeness) -> Self {
        Self { derived }
    }

    pub fn derived_informativeness(&self) -> DerivedInformativeness {
        self.derived
    }

    /// Weight of a single judgment.
    pub fn judgment_weight(informativeness: f64, competence: Competence) -> f64 {
        informativeness * competence.value()
    }

    /// Weighted geometric mean of `(value, weight)` pairs.
    ///
    /// Weights are normalized to sum 1, or made uniform when their sum is not
    /// positive. Returns 1.0 for no input.
    pub fn aggregate_geometric(values_with_weights: &[(f64, f64)]) -> f64 {
        if values_with_weights.is_empty() {
            return 1.0;
        }
        let total: f64 = values_with_weights.iter().map(|(_, weight)| weight).sum();
        let count = values_with_weights.len() as f64;
        if total <= 0.0 {
            tracing::warn!(
                values = values_with_weights.len(),
                total,
                "Judgment weights are not positive, using uniform weights"
            );
        }

        let log_sum: f64 = values_with_weights
            .iter()
            .map(|(value, weight)| {
                let normalized = if total > 0.0 { weight / total } else { 1.0 / count };
                normalized * value.ln()
            })
            .sum();
        log_sum.exp()
    }

    /// Group matrix over `pcms`, which must share one ordered alternative list.
    ///
    /// Cells no expert filled stay at 1.0. The lower triangle is rewritten as
    /// the exact reciprocal of the upper triangle.
    pub fn group_aggregate(
        &self,
        pcms: &[PairwiseComparisonMatrix],
        competence: Option<&CompetenceMap>,
    ) -> Result<SquareMatrix, AggregationError> {
        let first = pcms.first().ok_or(AggregationError::NoMatrices)?;
        for pcm in &pcms[1..] {
            if pcm.alternatives() != first.alternatives() {
                return Err(AggregationError::MismatchedAlternatives {
                    expert_id: pcm.expert_id().to_string(),
                });
            }
        }

        let derived_bits = pcms
            .iter()
            .map(|pcm| self.derived.resolve(pcm))
            .collect::<Result<Vec<f64>, _>>()?;

        let n = first.len();
        let mut aggregated = SquareMatrix::from_element(n, n, 1.0);
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let mut judgments = Vec::with_capacity(pcms.len());
                for (pcm, fallback) in pcms.iter().zip(&derived_bits) {
                    if !pcm.is_filled(i, j) {
                        continue;
                    }
                    let informativeness = match pcm.original_judgment(i, j) {
                        Some(original) => original.informativeness()?,
                        None => *fallback,
                    };
                    let weight = Self::judgment_weight(
                        informativeness,
                        competence_of(competence, pcm.expert_id()),
                    );
                    judgments.push((pcm.value(i, j), weight));
                }
                if !judgments.is_empty() {
                    aggregated[(i, j)] = Self::aggregate_geometric(&judgments);
                    tracing::debug!(i, j, contributors = judgments.len(), value = aggregated[(i, j)], "Aggregated cell");
                }
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if aggregated[(i, j)] != 0.0 {
                    aggregated[(j, i)] = 1.0 / aggregated[(i, j)];
                }
            }
        }

        Ok(aggregated)
    }

    /// Normalized weight per expert: mean informativeness of their answered
    /// pairs (1.0 if none) times competence.
    ///
    /// A repeated expert id keeps the last matrix's weight. Weights are uniform
    /// when every raw weight is zero.
    pub fn calculate_expert_weights(
        pcms: &[PairwiseComparisonMatrix],
        competence: Option<&CompetenceMap>,
    ) -> Result<BTreeMap<String, f64>, AggregationError> {
        let mut raw = BTreeMap::new();
        for pcm in pcms {
            let mut total = 0.0;
            let mut count = 0usize;
            for ((i, j), original) in pcm.original_judgments() {
                if i < j {
                    total += original.informativeness()?;
                    count += 1;
                }
            }
            let average = if count > 0 { total / count as f64 } else { 1.0 };
            let weight = average * competence_of(competence, pcm.expert_id()).value();
            raw.insert(pcm.expert_id().to_string(), weight);
        }

        let total: f64 = raw.values().sum();
        if total > 0.0 {
            Ok(raw.into_iter().map(|(id, weight)| (id, weight / total)).collect())
        } else {
            if !raw.is_empty() {
                tracing::warn!(experts = raw.len(), "All expert weights are zero, using uniform weights");
            }
            let uniform = 1.0 / raw.len().max(1) as f64;
            Ok(raw.into_keys().map(|id| (id, uniform)).collect())
        }
    }

    /// Group matrix plus expert weights and per-expert diagnostics.
    pub fn aggregate_with_statistics(
        &self,
        pcms: &[PairwiseComparisonMatrix],
        competence: Option<&CompetenceMap>,
    ) -> Result<AggregationResult, AggregationError> {
        let aggregated_matrix = self.group_aggregate(pcms, competence)?;
        let expert_weights = Self::calculate_expert_weights(pcms, competence)?;

        let expert_statistics = pcms
            .iter()
            .map(|pcm| ExpertStatistics {
                expert_id: pcm.expert_id().to_string(),
                weight: expert_weights.get(pcm.expert_id()).copied().unwrap_or(0.0),
                competence: competence_of(competence, pcm.expert_id()).value(),
                n_judgments: pcm.judgment_count(),
                status: pcm.status(),
            })
            .collect();

        tracing::info!(experts = pcms.len(), "Aggregated expert matrices");

        Ok(AggregationResult {
            aggregated_matrix,
            expert_weights,
            expert_statistics,
            n_experts: pcms.len(),
            // group_aggregate has already rejected an empty list
            alternatives: pcms
                .first()
                .map(|pcm| pcm.alternatives().to_vec())
                .unwrap_or_default(),
        })
    }
}

fn competence_of(competence: Option<&CompetenceMap>, expert_id: &str) -> Competence {
    competence
        .and_then(|map| map.get(expert_id))
        .copied()
        .unwrap_or_default()
}
