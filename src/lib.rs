//! Module aggregation and metric evaluation for building life-cycle assessments
//!
//! This crate turns per-unit environmental impact factors into absolute results for a
//! material quantity, and aggregates those results across life-cycle modules without
//! double counting or silently dropping partially reported data.
//!
//! # Module Organization
//!
//! - [`modules`]: Life-cycle module identifiers and the combination graph
//! - [`indicators`]: Sparse module/value sets, aggregate completion, totals and summation
//! - [`metrics`]: Metric types and per-unit metric data
//! - [`evaluation`]: Evaluation strategies turning metrics into absolute values
//! - [`results`]: Material and element results, grouping and project totals
//! - [`registry`]: Cached resolution of result constructors from category names
//! - [`transport`]: Transport leg evaluation and override merging
//! - [`config`]: Engine configuration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod config;
pub mod evaluation;
pub mod indicators;
pub mod metrics;
pub mod modules;
pub mod registry;
pub mod results;
pub mod transport;
