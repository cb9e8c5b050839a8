//! End-to-end analysis of a group session.

use crate::domain::aggregation::{DerivedInformativeness, GroupAggregator};
use crate::domain::consistency::{
    generate_revision_suggestions, rank_weights, ConsistencyAnalyzer, CONSISTENCY_THRESHOLD,
};
use crate::domain::pcm::PairwiseComparisonMatrix;
use crate::domain::scale::informativeness;

use super::{AnalysisError, ExpertAnalysis, GroupAnalysisReport, ScaleTransformation, SessionInput};

/// Number of revision suggestions produced by default.
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

/// Tunables of a [`GroupAnalysis`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    /// CR below this value counts as consistent.
    pub consistency_threshold: f64,
    /// Upper bound on revision suggestions for an inconsistent group matrix.
    pub suggestion_count: usize,
    /// Complete connected partial matrices before analysis.
    pub fill_incomplete: bool,
    pub derived_informativeness: DerivedInformativeness,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            consistency_threshold: CONSISTENCY_THRESHOLD,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            fill_incomplete: true,
            derived_informativeness: DerivedInformativeness::default(),
        }
    }
}

/// Runs the full pairwise comparison method over a session.
#[derive(Debug, Clone, Default)]
pub struct GroupAnalysis {
    settings: AnalysisSettings,
}

impl GroupAnalysis {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Builds, completes, checks and aggregates every expert's matrix, then
    /// derives group weights and a ranking.
    ///
    /// Revision suggestions are produced only when the group matrix is
    /// inconsistent.
    pub fn run(&self, session: &SessionInput) -> Result<GroupAnalysisReport, AnalysisError> {
        session.validate()?;
        tracing::info!(
            alternatives = session.alternatives.len(),
            experts = session.experts.len(),
            "Starting group analysis"
        );

        let mut pcms = Vec::with_capacity(session.experts.len());
        let mut derived_counts = Vec::with_capacity(session.experts.len());
        for expert in &session.experts {
            let mut pcm = PairwiseComparisonMatrix::build(
                session.alternatives.clone(),
                &expert.judgments,
                expert.expert_id.clone(),
            )
            .map_err(|source| AnalysisError::judgment(&expert.expert_id, source))?;
            derived_counts.push(self.complete(&mut pcm));
            pcms.push(pcm);
        }

        let mut experts = Vec::with_capacity(pcms.len());
        for (pcm, derived_comparisons) in pcms.iter().zip(derived_counts) {
            let consistency =
                ConsistencyAnalyzer::report_with_threshold(pcm.unified(), self.settings.consistency_threshold)?;
            tracing::info!(
                expert = pcm.expert_id(),
                cr = consistency.consistency_ratio,
                consistent = consistency.is_consistent,
                "Expert consistency"
            );
            experts.push(ExpertAnalysis {
                matrix: pcm.snapshot(),
                derived_comparisons,
                missing_comparisons: pcm.missing_comparisons(),
                consistency,
            });
        }

        let competence = session.competence_map();
        let aggregation = GroupAggregator::new(self.settings.derived_informativeness)
            .aggregate_with_statistics(&pcms, Some(&competence))?;
        let group_matrix = &aggregation.aggregated_matrix;

        let group_consistency =
            ConsistencyAnalyzer::report_with_threshold(group_matrix, self.settings.consistency_threshold)?;
        tracing::info!(
            cr = group_consistency.consistency_ratio,
            consistent = group_consistency.is_consistent,
            "Group consistency"
        );

        let suggestions = if group_consistency.is_consistent {
            Vec::new()
        } else {
            generate_revision_suggestions(
                group_matrix,
                &session.alternatives,
                self.settings.suggestion_count,
            )?
        };

        let weights_eigenvector = ConsistencyAnalyzer::weights_eigenvector(group_matrix)?;
        let weights_geometric_mean = ConsistencyAnalyzer::weights_geometric_mean(group_matrix)?;
        let ranking = rank_weights(&weights_eigenvector, &session.alternatives)?;
        let scale_transformations = scale_transformations(&pcms)?;

        tracing::info!(
            best = ranking.first().map(|ranked| ranked.alternative.as_str()),
            suggestions = suggestions.len(),
            "Group analysis complete"
        );

        Ok(GroupAnalysisReport {
            alternatives: session.alternatives.clone(),
            experts,
            aggregation,
            group_consistency,
            suggestions,
            weights_eigenvector,
            weights_geometric_mean,
            ranking,
            scale_transformations,
        })
    }

    /// Fills a connected incomplete matrix transitively; returns the number
    /// of derived comparisons.
    fn complete(&self, pcm: &mut PairwiseComparisonMatrix) -> usize {
        if !self.settings.fill_incomplete || !pcm.status().is_incomplete() {
            return 0;
        }
        if !pcm.check_connectivity() {
            tracing::warn!(
                expert = pcm.expert_id(),
                missing = pcm.missing_comparisons().len(),
                "Comparison graph is disconnected, skipping transitive fill"
            );
            return 0;
        }
        let derived = pcm.fill_transitive();
        tracing::debug!(expert = pcm.expert_id(), derived, "Filled matrix transitively");
        derived
    }
}

/// One entry per answered pair, in expert then row-major order.
fn scale_transformations(
    pcms: &[PairwiseComparisonMatrix],
) -> Result<Vec<ScaleTransformation>, AnalysisError> {
    let mut entries = Vec::new();
    for pcm in pcms {
        let alternatives = pcm.alternatives();
        for ((i, j), original) in pcm.original_judgments() {
            if i > j {
                continue;
            }
            entries.push(ScaleTransformation {
                expert_id: pcm.expert_id().to_string(),
                comparison: format!("{} vs {}", alternatives[i], alternatives[j]),
                alt_i: alternatives[i].clone(),
                alt_j: alternatives[j].clone(),
                original_scale: original.scale,
                gradations: original.gradations,
                original_value: original.value,
                unified_value: pcm.value(i, j),
                informativeness: informativeness(original.gradations)?,
            });
        }
    }
    Ok(entries)
}
