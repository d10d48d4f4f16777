use super::{Metric, MetricType, QuantityType};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// The metrics published by one environmental product declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: CompactString,

    /// What the per-unit factors are expressed per
    pub quantity_type: QuantityType,

    pub metrics: Vec<Metric>,
}

impl Declaration {
    #[must_use]
    pub fn new(name: impl Into<CompactString>, quantity_type: QuantityType, metrics: Vec<Metric>) -> Self {
        Self {
            name: name.into(),
            quantity_type,
            metrics,
        }
    }

    /// Returns the first metric of the given type.
    #[must_use]
    pub fn metric(&self, metric_type: MetricType) -> Option<&Metric> {
        self.metrics.iter().find(|metric| metric.metric_type == metric_type)
    }

    /// Whether the declaration reports the given metric type.
    #[must_use]
    pub fn provides(&self, metric_type: MetricType) -> bool {
        self.metric(metric_type).is_some()
    }
}
