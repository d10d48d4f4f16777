use crate::metrics::MetricType;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Absolute transport impacts, one value per metric type.
pub type TransportValues = BTreeMap<MetricType, f64>;

/// One impact factor of a transport scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactor {
    pub metric_type: MetricType,
    pub value: f64,
}

impl EnvironmentalFactor {
    #[must_use]
    pub const fn new(metric_type: MetricType, value: f64) -> Self {
        Self { metric_type, value }
    }
}

/// Emission factors of a vehicle, per unit of mass and distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleEmissions {
    pub name: CompactString,
    pub factors: Vec<EnvironmentalFactor>,

    /// Share of the outbound trip added for the return trip (0 for none, 1 for an empty return)
    pub return_trip_factor: f64,
}

/// A single journey by one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleTransportMode {
    pub vehicle: VehicleEmissions,
    pub distance: f64,
}

impl SingleTransportMode {
    fn values(&self, mass: f64, filter: &[MetricType]) -> TransportValues {
        let quantity = mass * self.distance * (1.0 + self.vehicle.return_trip_factor);
        accumulate(&self.vehicle.factors, quantity, filter)
    }
}

/// How the transport impacts of a material are described.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum TransportScenario {
    /// Factors already covering the whole journey, per unit of mass.
    Full { factors: Vec<EnvironmentalFactor> },

    /// One journey by one vehicle.
    SingleMode(SingleTransportMode),

    /// Several journeys, each by one vehicle.
    Distance { legs: Vec<SingleTransportMode> },
}

impl TransportScenario {
    /// Evaluates the scenario for `mass`, keeping the metric types in `filter` (all if empty).
    ///
    /// Values for the same metric type are added together.
    #[must_use]
    pub fn values(&self, mass: f64, filter: &[MetricType]) -> TransportValues {
        match self {
            Self::Full { factors } => accumulate(factors, mass, filter),
            Self::SingleMode(mode) => mode.values(mass, filter),
            Self::Distance { legs } => {
                let mut values = TransportValues::new();
                for leg in legs {
                    for (metric_type, value) in leg.values(mass, filter) {
                        *values.entry(metric_type).or_insert(0.0) += value;
                    }
                }
                values
            }
        }
    }

    /// Whether the scenario has a factor for `metric_type`.
    #[must_use]
    pub fn provides(&self, metric_type: MetricType) -> bool {
        let has = |factors: &[EnvironmentalFactor]| factors.iter().any(|f| f.metric_type == metric_type);
        match self {
            Self::Full { factors } => has(factors),
            Self::SingleMode(mode) => has(&mode.vehicle.factors),
            Self::Distance { legs } => legs.iter().any(|leg| has(&leg.vehicle.factors)),
        }
    }
}

fn accumulate(factors: &[EnvironmentalFactor], quantity: f64, filter: &[MetricType]) -> TransportValues {
    let mut values = TransportValues::new();
    for factor in factors
        .iter()
        .filter(|f| filter.is_empty() || filter.contains(&f.metric_type))
    {
        *values.entry(factor.metric_type).or_insert(0.0) += quantity * factor.value;
    }
    values
}
