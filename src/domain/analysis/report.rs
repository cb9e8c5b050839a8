//! Output of a group analysis run.

use serde::{Deserialize, Serialize};

use crate::domain::aggregation::AggregationResult;
use crate::domain::consistency::{ConsistencyReport, RankedAlternative, RevisionSuggestion};
use crate::domain::pcm::PcmSnapshot;
use crate::domain::scale::Scale;

/// One answered pair traced from its original scale to the cardinal range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleTransformation {
    pub expert_id: String,
    /// "alt_i vs alt_j".
    pub comparison: String,
    pub alt_i: String,
    pub alt_j: String,
    pub original_scale: Scale,
    pub gradations: usize,
    pub original_value: f64,
    pub unified_value: f64,
    /// Bits carried by the original scale.
    pub informativeness: f64,
}

/// Per-expert part of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertAnalysis {
    pub matrix: PcmSnapshot,
    /// Comparisons derived by transitive fill.
    pub derived_comparisons: usize,
    /// Pairs still unanswered after any fill.
    pub missing_comparisons: Vec<(String, String)>,
    pub consistency: ConsistencyReport,
}

/// Everything a session analysis produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAnalysisReport {
    pub alternatives: Vec<String>,
    pub experts: Vec<ExpertAnalysis>,
    pub aggregation: AggregationResult,
    pub group_consistency: ConsistencyReport,
    /// Empty unless the group matrix is inconsistent.
    pub suggestions: Vec<RevisionSuggestion>,
    pub weights_eigenvector: Vec<f64>,
    pub weights_geometric_mean: Vec<f64>,
    /// Ranking by eigenvector weights.
    pub ranking: Vec<RankedAlternative>,
    pub scale_transformations: Vec<ScaleTransformation>,
}

impl GroupAnalysisReport {
    /// Name of the top-ranked alternative.
    pub fn best_alternative(&self) -> Option<&str> {
        self.ranking.first().map(|ranked| ranked.alternative.as_str())
    }

    /// Experts whose own matrix failed the consistency check.
    pub fn inconsistent_experts(&self) -> Vec<&str> {
        self.experts
            .iter()
            .filter(|expert| !expert.consistency.is_consistent)
            .map(|expert| expert.matrix.expert_id.as_str())
            .collect()
    }
}
