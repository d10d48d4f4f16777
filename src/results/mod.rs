//! Absolute result records and their aggregation
//!
//! A [`MaterialResult`] carries the absolute values of one metric type for one material
//! quantity. The material results of an object are grouped by metric type into
//! [`ElementResult`]s, and element results can in turn be reduced to per-metric-type
//! [`ProjectTotal`]s for a stage.

mod element_result;
mod grouping;
mod material_result;
mod result_kind;

pub use element_result::ElementResult;
pub use grouping::{ProjectTotal, element_results, project_totals};
pub use material_result::MaterialResult;
pub use result_kind::{Representation, ResultKind};
