use super::{AllocationParameters, EvaluationNote, Evaluated};
use crate::Result;
use crate::indicators::{IndicatorSet, complete};
use crate::metrics::{Metric, MetricType};
use crate::modules::Module;
use ohno::bail;

const LOG_TARGET: &str = "  strategy";

/// Relative tolerance when checking a reported A5 against its reported parts.
const A5_TOLERANCE: f64 = 1e-9;

/// Turns a per-unit metric into absolute values for a quantity.
pub trait EvaluationStrategy {
    /// Whether this strategy handles metrics of the given type.
    fn applies_to(&self, metric_type: MetricType) -> bool;

    /// Evaluates a metric this strategy applies to.
    fn evaluate(&self, metric: &Metric, quantity: f64) -> Result<Evaluated>;
}

/// Scales every module linearly with the quantity.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl EvaluationStrategy for DefaultStrategy {
    fn applies_to(&self, _metric_type: MetricType) -> bool {
        true
    }

    fn evaluate(&self, metric: &Metric, quantity: f64) -> Result<Evaluated> {
        Ok(Evaluated::new(metric.indicators.scaled(quantity)))
    }
}

/// Scales like [`DefaultStrategy`], but allocates A5a and C1 from project-level figures.
///
/// The share of the evaluated quantity in the total project weight decides how much of the project's site activity and deconstruction
/// emissions it carries. Only total and fossil climate change metrics are handled.
#[derive(Debug, Clone, Copy)]
pub struct AllocatedStrategy {
    parameters: AllocationParameters,
}

impl AllocatedStrategy {
    pub const APPLICABLE_TYPES: &[MetricType] = &[
        MetricType::ClimateChangeTotal,
        MetricType::ClimateChangeTotalNoBiogenic,
        MetricType::ClimateChangeFossil,
    ];

    #[must_use]
    pub const fn new(parameters: AllocationParameters) -> Self {
        Self { parameters }
    }

    #[must_use]
    pub const fn parameters(&self) -> &AllocationParameters {
        &self.parameters
    }
}

impl EvaluationStrategy for AllocatedStrategy {
    fn applies_to(&self, metric_type: MetricType) -> bool {
        Self::APPLICABLE_TYPES.contains(&metric_type)
    }

    fn evaluate(&self, metric: &Metric, quantity: f64) -> Result<Evaluated> {
        self.parameters.validate()?;

        let per_unit = &metric.indicators;
        check_a5_consistency(per_unit, metric.metric_type)?;

        let weight_factor = self.parameters.weight_factor(quantity);
        let mut notes = Vec::new();
        if weight_factor == 0.0 {
            log::warn!(
                target: LOG_TARGET,
                "Total weight {} is zero or smaller than the mass {quantity}; A5a and C1 of {} are set to zero",
                self.parameters.total_weight,
                metric.metric_type
            );
            notes.push(EvaluationNote::ZeroWeightFactor {
                quantity,
                total_weight: self.parameters.total_weight,
            });
        }

        let mut values = per_unit.scaled(quantity);

        let a5a = self.parameters.project_cost * self.parameters.a5_carbon_factor * weight_factor;
        values.insert(Module::A5a, a5a);
        match values.get(Module::A5w) {
            Some(a5w) => values.insert(Module::A5, a5a + a5w),
            None => {
                if values.remove(Module::A5).is_some() {
                    log::debug!(target: LOG_TARGET, "Dropping A5 of {}: its site activity share was reallocated", metric.metric_type);
                }
            }
        }

        let c1 = weight_factor * self.parameters.floor_area * self.parameters.c1_carbon_factor;
        values.insert(Module::C1, c1);

        if complete(per_unit).contains(Module::C1toC4) {
            let parts: Option<Vec<f64>> = [Module::C1, Module::C2, Module::C3, Module::C4]
                .iter()
                .map(|module| values.get(*module))
                .collect();
            match parts {
                Some(parts) => values.insert(Module::C1toC4, parts.iter().sum()),
                None => {
                    log::debug!(target: LOG_TARGET, "Dropping C1toC4 of {}: its parts are incomplete after reallocating C1", metric.metric_type);
                    let _ = values.remove(Module::C1toC4);
                }
            }
        }

        Ok(Evaluated { indicators: values, notes })
    }
}

/// Rejects per-unit data whose reported A5 disagrees with its reported parts.
fn check_a5_consistency(per_unit: &IndicatorSet, metric_type: MetricType) -> Result<()> {
    let Some(a5) = per_unit.get(Module::A5) else {
        return Ok(());
    };

    let a5a = per_unit.get(Module::A5a);
    let a5w = per_unit.get(Module::A5w);
    if a5a.is_none() && a5w.is_none() {
        return Ok(());
    }

    match (a5a, a5w) {
        (Some(a5a), Some(a5w)) if (a5 - (a5a + a5w)).abs() <= A5_TOLERANCE * a5.abs().max(1.0) => Ok(()),
        _ => bail!(
            "{metric_type} reports A5 = {a5} alongside inconsistent parts (A5a = {a5a:?}, A5w = {a5w:?}); unable to tell which to reallocate"
        ),
    }
}
