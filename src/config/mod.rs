//! Engine configuration
//!
//! The configuration selects the evaluation strategy, the summation policy and the metric
//! types to evaluate. It is read from `lca.toml`, `lca.yml`, `lca.yaml` or `lca.json`, and
//! falls back to the embedded defaults when no file is present.

#[expect(clippy::module_inception, reason = "the module is named after its main type")]
mod config;

pub use config::{Config, DEFAULT_CONFIG_TOML};
