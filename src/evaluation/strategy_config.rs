use crate::Result;
use ohno::bail;
use serde::{Deserialize, Serialize};

/// Project-level figures used to allocate site activities (A5) and deconstruction (C1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllocationParameters {
    /// Total project cost the A5 carbon factor applies to
    pub project_cost: f64,

    /// Gross floor area the C1 carbon factor applies to
    pub floor_area: f64,

    /// Total weight of the project, used to work out each material's share
    pub total_weight: f64,

    /// Site activity emissions per unit of project cost
    pub a5_carbon_factor: f64,

    /// Deconstruction emissions per unit of floor area
    pub c1_carbon_factor: f64,
}

impl AllocationParameters {
    /// Checks that every parameter is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("project_cost", self.project_cost),
            ("floor_area", self.floor_area),
            ("total_weight", self.total_weight),
            ("a5_carbon_factor", self.a5_carbon_factor),
            ("c1_carbon_factor", self.c1_carbon_factor),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                bail!("allocation parameter '{name}' must be finite, got {value}");
            }

            if value < 0.0 {
                bail!("allocation parameter '{name}' must not be negative, got {value}");
            }
        }

        Ok(())
    }

    /// The share of the project-level allocation carried by `mass`.
    ///
    /// Zero when the total weight is zero or smaller than `mass`.
    #[must_use]
    pub fn weight_factor(&self, mass: f64) -> f64 {
        if self.total_weight == 0.0 || self.total_weight < mass {
            0.0
        } else {
            mass / self.total_weight
        }
    }
}

/// Selects how per-unit metrics are turned into absolute values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum EvaluationStrategyConfig {
    /// Every module scales linearly with the quantity.
    #[default]
    Default,

    /// A5 and C1 of climate change metrics are allocated from project-level figures.
    Allocated(AllocationParameters),
}

impl EvaluationStrategyConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Default => Ok(()),
            Self::Allocated(parameters) => parameters.validate(),
        }
    }
}
