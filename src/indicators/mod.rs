//! Sparse per-module values and the algorithms over them
//!
//! An [`IndicatorSet`] maps life-cycle modules to values for one metric. A missing key means
//! the module was not reported; it is never read as zero.
//!
//! # Implementation Model
//!
//! Three pure algorithms operate on indicator sets, each returning a new set:
//!
//! - [`complete`] derives missing combination modules from their parts, walking the
//!   combination graph children first and never overwriting reported values.
//! - [`total_of`] computes the total of a stage, preferring the broadest reported aggregate
//!   and discarding every part it covers so nothing is counted twice.
//! - [`sum_sets`] adds several sets of the same kind together, keeping either the modules
//!   reported by all inputs ([`SumPolicy::IntersectionOnly`]) or by any input
//!   ([`SumPolicy::UnionPartial`]).
//!
//! Summation is generic over [`ModuleData`] so that material and element results can be
//! summed directly, with a kind check guarding against mixing unrelated metrics.

mod completion;
mod indicator_set;
mod summation;
mod totals;

pub use completion::complete;
pub use indicator_set::IndicatorSet;
pub use summation::{ModuleData, SumOutcome, SumPolicy, sum_sets, sum_values};
pub use totals::{StageTotal, total_of};
