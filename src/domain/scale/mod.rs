//! Scale Model - rating scales, informativeness and cardinal unification.
//!
//! Experts may answer each pairwise prompt on a different scale with a
//! different number of grades. Every answer is funnelled through one
//! normalisation law ([`unify_to_cardinal`]) onto integers in [1, 9] so the
//! comparison matrices of different experts can be combined.
//!
//! # Components
//!
//! - [`Scale`] - the closed set of six scales, each owning its formula
//! - [`informativeness`] - Hartley measure log₂ N of a scale's resolution
//! - [`unify_judgment`] - nearest-grade lookup followed by cardinal mapping
//! - [`suggest_refinement`] - next finer scale for adaptive re-questioning

mod errors;
mod formulas;
mod kind;
mod refinement;
mod unification;

pub use errors::ScaleError;
pub use formulas::{
    BalancedFormula, DoneganFormula, MaZhengFormula, OrdinalFormula, PowerFormula, Saaty9Formula,
};
pub use kind::{Scale, ScaleFormula};
pub use refinement::{linguistic_label, suggest_refinement, Refinement};
pub use unification::{correspondence_table, informativeness, unify_judgment, unify_to_cardinal};
