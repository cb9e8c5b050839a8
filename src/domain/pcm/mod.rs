//! Pairwise Comparison Matrix - one expert's reciprocal judgment matrix.
//!
//! Judgments on any scale are unified to the cardinal range on entry. Each
//! filled cell remembers the scale it was answered on so aggregation can
//! weigh it by informativeness. Partial matrices whose comparison graph is
//! connected can be completed transitively.

mod errors;
mod judgment;
mod matrix;
mod status;

pub use errors::PcmError;
pub use judgment::{JudgmentRecord, OriginalJudgment};
pub use matrix::{PairwiseComparisonMatrix, PcmSnapshot};
pub use status::PcmStatus;
