use super::MetricType;
use crate::indicators::{IndicatorSet, ModuleData};
use serde::{Deserialize, Serialize};

/// Per-declared-unit impact factors for one metric type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub metric_type: MetricType,
    pub indicators: IndicatorSet,
}

impl Metric {
    #[must_use]
    pub const fn new(metric_type: MetricType, indicators: IndicatorSet) -> Self {
        Self { metric_type, indicators }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

impl ModuleData for Metric {
    type Kind = MetricType;

    fn kind(&self) -> Self::Kind {
        self.metric_type
    }

    fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }
}
