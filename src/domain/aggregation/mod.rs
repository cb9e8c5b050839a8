//! Aggregation Engine - combines expert matrices into a group matrix.
//!
//! Each judgment is weighted by the informativeness of the scale it was given
//! on (log₂ of the gradation count) times the competence of its expert, and
//! cells are combined by weighted geometric mean.

mod aggregator;
mod errors;
mod policy;
mod statistics;

pub use aggregator::{CompetenceMap, GroupAggregator};
pub use errors::AggregationError;
pub use policy::{DerivedInformativeness, DEFAULT_DERIVED_BITS};
pub use statistics::{AggregationResult, ExpertStatistics};
