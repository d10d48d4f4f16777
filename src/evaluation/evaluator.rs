use super::{AllocatedStrategy, DefaultStrategy, EvaluationNote, EvaluationStrategy, EvaluationStrategyConfig, Evaluated};
use crate::Result;
use crate::metrics::{Declaration, Metric, MetricType, filter_metrics};
use crate::registry::constructor_for;
use crate::results::{MaterialResult, ResultKind};
use ohno::{app_err, bail};

const LOG_TARGET: &str = "evaluation";

/// Evaluates one metric for `quantity` using the configured strategy.
///
/// Metrics from an older standard are evaluated normally but carry a
/// [`EvaluationNote::DeprecatedStandard`] note. A strategy that does not handle the metric
/// type falls back to default scaling with an [`EvaluationNote::InapplicableStrategy`] note.
///
/// # Errors
///
/// Fails if `quantity` is not finite, or if the allocated strategy meets inconsistent A5 data.
pub fn evaluate(metric: &Metric, quantity: f64, config: &EvaluationStrategyConfig) -> Result<Evaluated> {
    if !quantity.is_finite() {
        bail!("cannot evaluate {} for non-finite quantity {quantity}", metric.metric_type);
    }

    let mut notes = Vec::new();
    if metric.metric_type.is_deprecated() {
        log::warn!(
            target: LOG_TARGET,
            "{} comes from an older standard; its results are only comparable with metrics of the same standard",
            metric.metric_type
        );
        notes.push(EvaluationNote::DeprecatedStandard {
            metric_type: metric.metric_type,
        });
    }

    if metric.is_empty() {
        return Ok(Evaluated {
            indicators: metric.indicators.clone(),
            notes,
        });
    }

    let mut evaluated = match config {
        EvaluationStrategyConfig::Default => DefaultStrategy.evaluate(metric, quantity)?,
        EvaluationStrategyConfig::Allocated(parameters) => {
            let strategy = AllocatedStrategy::new(*parameters);
            if strategy.applies_to(metric.metric_type) {
                strategy.evaluate(metric, quantity)?
            } else {
                log::debug!(
                    target: LOG_TARGET,
                    "Allocated evaluation does not apply to {}; scaling by quantity",
                    metric.metric_type
                );
                DefaultStrategy.evaluate(metric, quantity)?.with_note(EvaluationNote::InapplicableStrategy {
                    metric_type: metric.metric_type,
                })
            }
        }
    };

    notes.append(&mut evaluated.notes);
    evaluated.notes = notes;
    Ok(evaluated)
}

/// Evaluates the metrics of a declaration selected by `filter` into material results.
///
/// # Errors
///
/// Fails on the first metric that cannot be evaluated.
pub fn evaluate_declaration(
    declaration: &Declaration,
    quantity: f64,
    material_name: &str,
    filter: &[MetricType],
    config: &EvaluationStrategyConfig,
) -> Result<Vec<MaterialResult>> {
    filter_metrics(&declaration.metrics, filter)
        .map(|metric| -> Result<MaterialResult> {
            let evaluated = evaluate(metric, quantity, config)
                .map_err(|e| app_err!("evaluating '{}' of material '{material_name}': {e}", declaration.name))?;

            for note in &evaluated.notes {
                log::debug!(target: LOG_TARGET, "{material_name}: {note}");
            }

            Ok(constructor_for(ResultKind::material(metric.metric_type)).material_result(
                material_name,
                Some(declaration.name.clone()),
                evaluated.indicators,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::AllocationParameters;
    use crate::indicators::IndicatorSet;
    use crate::metrics::QuantityType;
    use crate::modules::Module;

    fn allocated() -> EvaluationStrategyConfig {
        EvaluationStrategyConfig::Allocated(AllocationParameters {
            project_cost: 1_000_000.0,
            floor_area: 1_000.0,
            total_weight: 20_000.0,
            a5_carbon_factor: 0.1,
            c1_carbon_factor: 2.0,
        })
    }

    fn declaration() -> Declaration {
        Declaration::new(
            "Glulam EPD",
            QuantityType::Mass,
            vec![
                Metric::new(MetricType::ClimateChangeTotal, IndicatorSet::new().with(Module::A1toA3, -1.5)),
                Metric::new(MetricType::Acidification, IndicatorSet::new().with(Module::A1toA3, 0.01)),
                Metric::new(MetricType::GlobalWarmingPotential, IndicatorSet::new().with(Module::A1toA3, 0.4)),
            ],
        )
    }

    #[test]
    fn test_default_evaluation() {
        let metric = Metric::new(MetricType::Acidification, IndicatorSet::new().with(Module::A1, 2.0));
        let evaluated = evaluate(&metric, 5.0, &EvaluationStrategyConfig::Default).unwrap();
        assert_eq!(evaluated.indicators, IndicatorSet::new().with(Module::A1, 10.0));
        assert!(evaluated.notes.is_empty());
    }

    #[test]
    fn test_inapplicable_strategy_falls_back_with_note() {
        let metric = Metric::new(MetricType::Acidification, IndicatorSet::new().with(Module::C1, 2.0));
        let evaluated = evaluate(&metric, 5.0, &allocated()).unwrap();
        assert_eq!(evaluated.indicators.get(Module::C1), Some(10.0));
        assert!(!evaluated.indicators.contains(Module::A5a));
        assert_eq!(
            evaluated.notes,
            vec![EvaluationNote::InapplicableStrategy {
                metric_type: MetricType::Acidification
            }]
        );
    }

    #[test]
    fn test_deprecated_standard_note() {
        let metric = Metric::new(MetricType::GlobalWarmingPotential, IndicatorSet::new().with(Module::A1toA3, 1.0));
        let evaluated = evaluate(&metric, 2.0, &EvaluationStrategyConfig::Default).unwrap();
        assert_eq!(evaluated.indicators.get(Module::A1toA3), Some(2.0));
        assert!(evaluated.has_note(|note| matches!(note, EvaluationNote::DeprecatedStandard { .. })));
    }

    #[test]
    fn test_empty_metric_skips_allocation() {
        let metric = Metric::new(MetricType::ClimateChangeTotal, IndicatorSet::new());
        let evaluated = evaluate(&metric, 50.0, &allocated()).unwrap();
        assert!(evaluated.indicators.is_empty());
    }

    #[test]
    fn test_non_finite_quantity_is_an_error() {
        let metric = Metric::new(MetricType::Acidification, IndicatorSet::new().with(Module::A1, 2.0));
        let _ = evaluate(&metric, f64::NAN, &EvaluationStrategyConfig::Default).unwrap_err();
        let _ = evaluate(&metric, f64::INFINITY, &EvaluationStrategyConfig::Default).unwrap_err();
    }

    #[test]
    fn test_negative_quantity_is_allowed() {
        let metric = Metric::new(MetricType::Acidification, IndicatorSet::new().with(Module::D, 2.0));
        let evaluated = evaluate(&metric, -1.0, &EvaluationStrategyConfig::Default).unwrap();
        assert_eq!(evaluated.indicators.get(Module::D), Some(-2.0));
    }

    #[test]
    fn test_evaluate_declaration_labels_results() {
        let results = evaluate_declaration(&declaration(), 10.0, "Glulam", &[], &EvaluationStrategyConfig::Default).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].metric_type, MetricType::ClimateChangeTotal);
        assert_eq!(results[0].material_name, "Glulam");
        assert_eq!(results[0].source_name.as_deref(), Some("Glulam EPD"));
        assert_eq!(results[0].indicators.get(Module::A1toA3), Some(-15.0));
    }

    #[test]
    fn test_evaluate_declaration_applies_filter() {
        let results = evaluate_declaration(
            &declaration(),
            10.0,
            "Glulam",
            &[MetricType::Acidification],
            &allocated(),
        )
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].metric_type, MetricType::Acidification);
    }

    #[test]
    fn test_evaluate_declaration_reports_failing_metric() {
        let declaration = Declaration::new(
            "Broken EPD",
            QuantityType::Mass,
            vec![Metric::new(
                MetricType::ClimateChangeTotal,
                IndicatorSet::new().with(Module::A5, 9.0).with(Module::A5w, 1.0),
            )],
        );
        let err = evaluate_declaration(&declaration, 1.0, "Brick", &[], &allocated()).unwrap_err();
        assert!(err.to_string().contains("Broken EPD"));
    }

    #[test]
    fn test_allocated_evaluation_of_volume_declaration() {
        let declaration = Declaration::new(
            "Concrete EPD",
            QuantityType::Volume,
            vec![
                Metric::new(MetricType::Acidification, IndicatorSet::new().with(Module::A1toA3, 0.5)),
                Metric::new(MetricType::ClimateChangeTotal, IndicatorSet::new().with(Module::A1toA3, 300.0)),
            ],
        );
        let results = evaluate_declaration(&declaration, 50.0, "Slab", &[], &allocated()).unwrap();
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].metric_type, MetricType::Acidification);
        assert_eq!(results[0].indicators.get(Module::A1toA3), Some(25.0));
        assert!(!results[0].indicators.contains(Module::A5a));

        assert_eq!(results[1].indicators.get(Module::A1toA3), Some(15_000.0));
        assert_eq!(results[1].indicators.get(Module::A5a), Some(250.0));
    }
}
