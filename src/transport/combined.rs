use super::{TransportScenario, TransportValues, merge_with_transport_overrides};
use crate::Result;
use crate::evaluation::{EvaluationStrategyConfig, evaluate_declaration};
use crate::indicators::IndicatorSet;
use crate::metrics::{Declaration, MetricType};
use crate::registry::{FactorsProvider, ProviderKind, constructor_for};
use crate::results::{MaterialResult, ResultKind};
use compact_str::CompactString;
use ohno::{app_err, bail};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = " transport";

/// A declaration whose A4 and C2 values are replaced by explicit transport scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedFactors {
    pub name: CompactString,
    pub base: Declaration,

    /// Transport to the construction site
    pub a4: Option<TransportScenario>,

    /// Transport to end-of-life processing
    pub c2: Option<TransportScenario>,
}

impl CombinedFactors {
    fn legs(&self) -> impl Iterator<Item = &TransportScenario> {
        self.a4.iter().chain(self.c2.iter())
    }
}

impl FactorsProvider for CombinedFactors {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::CombinedFactors
    }

    fn provides(&self, metric_type: MetricType) -> bool {
        self.base.provides(metric_type) || self.legs().any(|leg| leg.provides(metric_type))
    }
}

/// Evaluates combined factors for a material.
///
/// The base declaration is evaluated for `quantity`; both transport legs are evaluated for
/// `mass`. Leg values override the base's A4 and C2 values. Results are labelled with the
/// combined factors' name.
///
/// # Errors
///
/// Fails if `mass` is not finite or if the base declaration cannot be evaluated.
pub fn evaluate_combined(
    combined: &CombinedFactors,
    quantity: f64,
    mass: f64,
    material_name: &str,
    filter: &[MetricType],
    config: &EvaluationStrategyConfig,
) -> Result<Vec<MaterialResult>> {
    if !mass.is_finite() {
        bail!("cannot evaluate transport of material '{material_name}' for non-finite mass {mass}");
    }

    let base: Vec<(MetricType, IndicatorSet)> = evaluate_declaration(&combined.base, quantity, material_name, filter, config)
        .map_err(|e| app_err!("evaluating combined factors '{}': {e}", combined.name))?
        .into_iter()
        .map(|result| (result.metric_type, result.indicators))
        .collect();

    let leg_values = |leg: Option<&TransportScenario>| leg.map_or_else(TransportValues::new, |scenario| scenario.values(mass, filter));
    let a4 = leg_values(combined.a4.as_ref());
    let c2 = leg_values(combined.c2.as_ref());

    log::debug!(
        target: LOG_TARGET,
        "{material_name}: {} base metric(s), {} A4 and {} C2 transport value(s) from '{}'",
        base.len(),
        a4.len(),
        c2.len(),
        combined.name
    );

    Ok(merge_with_transport_overrides(base, &a4, &c2)
        .into_iter()
        .map(|(metric_type, indicators)| {
            constructor_for(ResultKind::material(metric_type)).material_result(
                material_name,
                Some(combined.name.clone()),
                indicators,
            )
        })
        .collect())
}
