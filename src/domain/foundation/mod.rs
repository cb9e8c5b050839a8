//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, matrix helpers and error types
//! that form the vocabulary of the pairwise comparison domain.

mod competence;
mod errors;
pub mod matrix;

pub use competence::Competence;
pub use errors::{ErrorCode, ValidationError};
pub use matrix::SquareMatrix;
