//! Domain layer containing the pairwise comparison method.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, competence, matrix helpers)
//! - `scale` - Rating scales, informativeness and cardinal unification
//! - `pcm` - One expert's pairwise comparison matrix
//! - `consistency` - Spectral consistency, priority weights, revision hints
//! - `aggregation` - Weighted geometric-mean group aggregation
//! - `analysis` - End-to-end group analysis pipeline

pub mod aggregation;
pub mod analysis;
pub mod consistency;
pub mod foundation;
pub mod pcm;
pub mod scale;
