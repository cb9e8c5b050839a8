//! Group analysis pipeline.
//!
//! Composes the scale, matrix, consistency and aggregation modules into the
//! complete method: build each expert's matrix, complete it where possible,
//! check consistency, aggregate, weigh and rank the alternatives.
//!
//! Everything here is a pure computation over a [`SessionInput`]; reading and
//! writing documents is left to the caller.

mod errors;
mod pipeline;
mod report;
mod session;

pub use errors::AnalysisError;
pub use pipeline::{AnalysisSettings, GroupAnalysis, DEFAULT_SUGGESTION_COUNT};
pub use report::{ExpertAnalysis, GroupAnalysisReport, ScaleTransformation};
pub use session::{ExpertInput, SessionInput};
