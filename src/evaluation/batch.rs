use super::{EvaluationStrategyConfig, evaluate_declaration};
use crate::Result;
use crate::metrics::{Declaration, MetricType, QuantityType};
use crate::registry::{FactorsProvider, ProviderKind, Resolution, resolve_for_providers};
use crate::results::MaterialResult;
use crate::transport::{CombinedFactors, evaluate_combined};
use compact_str::CompactString;
use ohno::bail;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "     batch";

/// One material to evaluate, with the factor providers attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    pub material_name: CompactString,

    /// Amount of material, in the unit its factors are declared per
    pub quantity: f64,

    /// Mass in kg, needed for transport legs when the quantity is not a mass
    #[serde(default)]
    pub mass: Option<f64>,

    #[serde(default)]
    pub declaration: Option<Declaration>,

    #[serde(default)]
    pub combined: Option<CombinedFactors>,
}

impl MaterialInput {
    #[must_use]
    pub fn new(material_name: impl Into<CompactString>, quantity: f64) -> Self {
        Self {
            material_name: material_name.into(),
            quantity,
            mass: None,
            declaration: None,
            combined: None,
        }
    }

    #[must_use]
    pub const fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declaration = Some(declaration);
        self
    }

    #[must_use]
    pub fn with_combined(mut self, combined: CombinedFactors) -> Self {
        self.combined = Some(combined);
        self
    }

    fn providers(&self) -> Vec<&dyn FactorsProvider> {
        let mut providers: Vec<&dyn FactorsProvider> = Vec::with_capacity(2);
        if let Some(combined) = &self.combined {
            providers.push(combined);
        }
        if let Some(declaration) = &self.declaration {
            providers.push(declaration);
        }
        providers
    }

    fn transport_mass(&self, combined: &CombinedFactors) -> Result<f64> {
        match self.mass {
            Some(mass) => Ok(mass),
            None if combined.base.quantity_type == QuantityType::Mass => Ok(self.quantity),
            None => bail!(
                "material '{}' has transport legs but no mass, and its quantity is a {}",
                self.material_name,
                combined.base.quantity_type
            ),
        }
    }
}

/// Evaluates one material.
///
/// When the material carries both combined factors and a plain declaration, each metric type
/// is taken from the highest priority provider able to produce it. Only the winning provider
/// is evaluated for a metric type, so a broken metric in a losing provider does not fail the
/// material.
///
/// # Errors
///
/// Fails if the material has no factor provider, if transport legs need a mass that cannot be
/// determined, or if a winning provider cannot be evaluated.
pub fn evaluate_material(input: &MaterialInput, filter: &[MetricType], config: &EvaluationStrategyConfig) -> Result<Vec<MaterialResult>> {
    let (combined, declaration) = match (&input.combined, &input.declaration) {
        (None, None) => bail!("material '{}' has no declaration or combined factors", input.material_name),
        (Some(combined), None) => return evaluate_combined_input(input, combined, filter, config),
        (None, Some(declaration)) => return evaluate_declaration(declaration, input.quantity, &input.material_name, filter, config),
        (Some(combined), Some(declaration)) => (combined, declaration),
    };

    let providers = input.providers();
    let mut combined_types = Vec::new();
    let mut declaration_types = Vec::new();
    for metric_type in MetricType::iter().filter(|t| filter.is_empty() || filter.contains(t)) {
        if !providers.iter().any(|provider| provider.provides(metric_type)) {
            continue;
        }

        let winner = match resolve_for_providers(metric_type.name(), &providers) {
            Resolution::Resolved(constructor) => constructor.provider(),
            Resolution::Unresolvable { category } => {
                log::warn!(target: LOG_TARGET, "{}: skipping unresolvable category '{category}'", input.material_name);
                continue;
            }
        };

        log::debug!(target: LOG_TARGET, "{}: {metric_type} taken from {winner:?}", input.material_name);
        match winner {
            Some(ProviderKind::CombinedFactors) => combined_types.push(metric_type),
            _ => declaration_types.push(metric_type),
        }
    }

    let mut results = Vec::with_capacity(combined_types.len() + declaration_types.len());
    if !combined_types.is_empty() {
        results.extend(evaluate_combined_input(input, combined, &combined_types, config)?);
    }
    if !declaration_types.is_empty() {
        results.extend(evaluate_declaration(declaration, input.quantity, &input.material_name, &declaration_types, config)?);
    }

    results.sort_by_key(|result| result.metric_type);
    Ok(results)
}

fn evaluate_combined_input(
    input: &MaterialInput,
    combined: &CombinedFactors,
    filter: &[MetricType],
    config: &EvaluationStrategyConfig,
) -> Result<Vec<MaterialResult>> {
    let mass = input.transport_mass(combined)?;
    evaluate_combined(combined, input.quantity, mass, &input.material_name, filter, config)
}

/// Evaluates many materials in parallel.
///
/// Returns one result per input, in input order; a failing material does not affect the others.
#[must_use]
pub fn evaluate_batch(inputs: &[MaterialInput], filter: &[MetricType], config: &EvaluationStrategyConfig) -> Vec<Result<Vec<MaterialResult>>> {
    inputs
        .par_iter()
        .map(|input| evaluate_material(input, filter, config))
        .collect()
}
