//! Consistency Engine - spectral analysis of reciprocal matrices.
//!
//! Computes λmax, CI and CR (against Saaty's random index), derives priority
//! weights by the eigenvector and row geometric-mean methods, and points at
//! the comparisons most responsible for inconsistency.

mod analyzer;
mod eigen;
mod errors;
mod revision;

pub use analyzer::{
    ConsistencyAnalyzer, ConsistencyReport, CONSISTENCY_THRESHOLD, RANDOM_INDEX,
    RANDOM_INDEX_FALLBACK,
};
pub use eigen::{principal_eigenvalue, principal_eigenvector};
pub use errors::ConsistencyError;
pub use revision::{generate_revision_suggestions, rank_weights, RankedAlternative, RevisionSuggestion};
