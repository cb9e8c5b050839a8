//! Aggregation output with per-expert diagnostics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::matrix::rows;
use crate::domain::foundation::SquareMatrix;
use crate::domain::pcm::PcmStatus;

/// Diagnostic record for one expert's contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertStatistics {
    pub expert_id: String,
    /// Normalized weight across all experts.
    pub weight: f64,
    pub competence: f64,
    /// Answered pairs, each counted once.
    pub n_judgments: usize,
    pub status: PcmStatus,
}

/// Group matrix together with the weights and diagnostics behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    #[serde(with = "rows")]
    pub aggregated_matrix: SquareMatrix,
    pub expert_weights: BTreeMap<String, f64>,
    pub expert_statistics: Vec<ExpertStatistics>,
    pub n_experts: usize,
    pub alternatives: Vec<String>,
}
