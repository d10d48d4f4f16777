use crate::metrics::MetricType;
use core::fmt;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The concrete shape a result takes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, Display, EnumString, IntoStaticStr,
)]
pub enum Representation {
    /// Absolute values for one material quantity.
    MaterialResult,

    /// Values for one object, summed over its materials.
    ElementResult,
}

/// The metric type and representation a result constructor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResultKind {
    pub metric_type: MetricType,
    pub representation: Representation,
}

impl ResultKind {
    #[must_use]
    pub const fn material(metric_type: MetricType) -> Self {
        Self {
            metric_type,
            representation: Representation::MaterialResult,
        }
    }

    #[must_use]
    pub const fn element(metric_type: MetricType) -> Self {
        Self {
            metric_type,
            representation: Representation::ElementResult,
        }
    }

    /// Parses a category identifier such as `ClimateChangeFossilElementResult`.
    ///
    /// The metric type is the longest matching prefix. The remainder selects the
    /// representation: `ElementResult` for element results, and `MaterialResult`, `Metric` or
    /// nothing at all for material results.
    #[must_use]
    pub fn from_category(category: &str) -> Option<Self> {
        let metric_type = MetricType::from_type_name(category)?;
        let suffix = category.strip_prefix(metric_type.name())?;
        let representation = match suffix {
            "" | "Metric" | "MaterialResult" => Representation::MaterialResult,
            "ElementResult" => Representation::ElementResult,
            _ => return None,
        };

        Some(Self {
            metric_type,
            representation,
        })
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.metric_type, self.representation)
    }
}
