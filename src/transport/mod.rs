//! Transport scenarios and combined factors
//!
//! Declarations often carry generic A4 (transport to site) and C2 (transport to end-of-life)
//! values. When the actual transport of a material is known, a [`TransportScenario`] describes
//! it and [`CombinedFactors`] pair it with the declaration. The scenario values then replace
//! the declaration's A4 and C2 values through [`merge_with_transport_overrides`].

mod combined;
mod merge;
mod scenario;

pub use combined::{CombinedFactors, evaluate_combined};
pub use merge::merge_with_transport_overrides;
pub use scenario::{EnvironmentalFactor, SingleTransportMode, TransportScenario, TransportValues, VehicleEmissions};
