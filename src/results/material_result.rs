use super::ResultKind;
use crate::indicators::{IndicatorSet, ModuleData};
use crate::metrics::MetricType;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Absolute impact values of one metric type for a material quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialResult {
    pub metric_type: MetricType,
    pub material_name: CompactString,

    /// The declaration or combined factors the values were evaluated from.
    pub source_name: Option<CompactString>,

    pub indicators: IndicatorSet,
}

impl ModuleData for MaterialResult {
    type Kind = ResultKind;

    fn kind(&self) -> Self::Kind {
        ResultKind::material(self.metric_type)
    }

    fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }
}
