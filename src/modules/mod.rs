//! Life-cycle module identifiers and the combination graph
//!
//! Environmental impact data is reported per life-cycle *module*: product stage (A1-A3),
//! construction (A4, A5), use (B1-B7), end of life (C1-C4) and benefits beyond the
//! system boundary (D). Data sources report at inconsistent granularity, so some modules
//! are *combinations* that stand for the pre-summed total of other modules.
//!
//! # Implementation Model
//!
//! [`Module`] is a closed enum covering both atomic and combination modules. The
//! combination graph is a static table ([`COMBINATION_MODULES`]) mapping each combination
//! to its ordered [`Constituent`]s, each flagged as required or optional. Constituents may
//! themselves be combinations (`B1toB7` is made of `B1toB5`, `B6` and `B7`), so the table
//! describes a DAG.
//!
//! Derived views of the graph are computed once on first use:
//! - [`dependency_order`]: combinations ordered children-first, used when deriving
//!   missing aggregates
//! - [`broadest_first`]: combinations ordered by how many atomic modules they cover, used
//!   when extracting totals so coarse aggregates win over their parts
//! - [`descendants`]: every module a combination covers, recursively

mod combination;
mod module;

pub use combination::{COMBINATION_MODULES, CombinationDef, Constituent, broadest_first, constituents, dependency_order, descendants};
pub use module::{Module, Stage, StageFilter};
