//! Pairwise Consensus - Multi-expert pairwise comparison analysis
//!
//! This crate implements the expert pairwise comparison method with
//! refinement of the degree of preference: judgments given on heterogeneous
//! rating scales are unified onto a common cardinal range, checked for
//! consistency, and aggregated into a group priority ranking.

pub mod config;
pub mod domain;
