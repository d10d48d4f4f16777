use super::ResultKind;
use crate::indicators::{IndicatorSet, ModuleData};
use crate::metrics::MetricType;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Impact values of one metric type for an object, summed over its materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementResult {
    pub metric_type: MetricType,
    pub object_id: CompactString,
    pub indicators: IndicatorSet,
}

impl ModuleData for ElementResult {
    type Kind = ResultKind;

    fn kind(&self) -> Self::Kind {
        ResultKind::element(self.metric_type)
    }

    fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }
}
