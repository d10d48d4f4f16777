//! Turning per-unit factors into absolute results
//!
//! A metric holds impact factors per declared unit. Evaluation multiplies them by a material
//! quantity through an [`EvaluationStrategy`]. The default strategy is a plain scalar multiply.
//! The allocated strategy also injects project-level figures into A5 and C1, for climate
//! change metrics only.
//!
//! Conditions that do not prevent a result, such as a strategy falling back to default
//! scaling, are reported as [`EvaluationNote`]s on the [`Evaluated`] output. Inconsistent
//! input data is an error, scoped to the metric or material being evaluated.

mod batch;
mod evaluated;
mod evaluator;
mod strategy;
mod strategy_config;

pub use batch::{MaterialInput, evaluate_batch, evaluate_material};
pub use evaluated::{Evaluated, EvaluationNote};
pub use evaluator::{evaluate, evaluate_declaration};
pub use strategy::{AllocatedStrategy, DefaultStrategy, EvaluationStrategy};
pub use strategy_config::{AllocationParameters, EvaluationStrategyConfig};
