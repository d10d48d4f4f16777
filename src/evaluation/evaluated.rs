use crate::indicators::IndicatorSet;
use crate::metrics::MetricType;
use core::fmt;

/// A recoverable condition met while evaluating a metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaluationNote {
    /// The selected strategy does not handle this metric type; default scaling was used.
    InapplicableStrategy { metric_type: MetricType },

    /// The total weight was zero or smaller than the quantity, so allocated modules are zero.
    ZeroWeightFactor { quantity: f64, total_weight: f64 },

    /// The metric comes from an older standard and is only comparable within that standard.
    DeprecatedStandard { metric_type: MetricType },
}

impl fmt::Display for EvaluationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InapplicableStrategy { metric_type } => {
                write!(f, "allocated evaluation does not apply to {metric_type}; values were scaled by quantity")
            }
            Self::ZeroWeightFactor { quantity, total_weight } => write!(
                f,
                "total weight {total_weight} is zero or smaller than the quantity {quantity}; A5a and C1 are zero"
            ),
            Self::DeprecatedStandard { metric_type } => write!(
                f,
                "{metric_type} comes from an older standard; its values are only comparable with metrics of the same standard"
            ),
        }
    }
}

/// Absolute values for one metric together with any notes raised while producing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluated {
    pub indicators: IndicatorSet,
    pub notes: Vec<EvaluationNote>,
}

impl Evaluated {
    #[must_use]
    pub const fn new(indicators: IndicatorSet) -> Self {
        Self {
            indicators,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: EvaluationNote) -> Self {
        self.notes.push(note);
        self
    }

    #[must_use]
    pub fn has_note(&self, predicate: impl Fn(&EvaluationNote) -> bool) -> bool {
        self.notes.iter().any(predicate)
    }
}
