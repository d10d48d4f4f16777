//! Properties of aggregate completion, totals, summation and override merging

use lca_engine::evaluation::{AllocationParameters, EvaluationStrategyConfig, evaluate};
use lca_engine::indicators::{IndicatorSet, SumPolicy, complete, sum_values, total_of};
use lca_engine::metrics::{Declaration, Metric, MetricType, QuantityType};
use lca_engine::modules::{Module, StageFilter};
use lca_engine::registry::{FactorsProvider, ProviderKind, resolve_for_providers};
use lca_engine::transport::{CombinedFactors, TransportValues, merge_with_transport_overrides};
use std::sync::Arc;

fn set(entries: &[(Module, f64)]) -> IndicatorSet {
    entries.iter().copied().collect()
}

#[test]
fn test_completion_is_idempotent() {
    let samples = [
        set(&[(Module::A1, 1.0), (Module::A2, 2.0), (Module::A3, 3.0)]),
        set(&[(Module::B1, 1.0), (Module::B2, 2.0), (Module::B3, 3.0), (Module::B4toB5, 5.0), (Module::B6, 6.0), (Module::B7, 7.0)]),
        set(&[(Module::C1, 1.0), (Module::C2, 2.0), (Module::C3toC4, 7.0), (Module::D, -3.0)]),
        set(&[(Module::A5a, 0.5), (Module::C1toC4, 4.0)]),
        IndicatorSet::new(),
    ];

    for sample in &samples {
        let once = complete(sample);
        assert_eq!(complete(&once), once);
    }
}

#[test]
fn test_granularities_give_the_same_total() {
    let parts = complete(&set(&[(Module::A1, 1.0), (Module::A2, 2.0), (Module::A3, 3.0)]));
    let aggregate = complete(&set(&[(Module::A1toA3, 6.0)]));

    assert_eq!(total_of(&parts, StageFilter::A).total, 6.0);
    assert_eq!(total_of(&aggregate, StageFilter::A).total, 6.0);
}

#[test]
fn test_use_stage_is_not_double_counted() {
    let values = set(&[
        (Module::B1, 1.0),
        (Module::B2, 2.0),
        (Module::B3, 3.0),
        (Module::B4toB5, 5.0),
        (Module::B6, 6.0),
        (Module::B7, 7.0),
    ]);

    assert_eq!(total_of(&values, StageFilter::B).total, 24.0);
    assert_eq!(total_of(&complete(&values), StageFilter::B).total, 24.0);
}

#[test]
fn test_summation_policies_diverge_on_partial_modules() {
    let first = set(&[(Module::A1, 1.0), (Module::A2, 2.0), (Module::D, 0.0)]);
    let second = set(&[(Module::A1, 10.0), (Module::A2, 20.0)]);

    assert_eq!(
        sum_values([&first, &second], SumPolicy::IntersectionOnly),
        set(&[(Module::A1, 11.0), (Module::A2, 22.0)])
    );
    assert_eq!(
        sum_values([&first, &second], SumPolicy::UnionPartial),
        set(&[(Module::A1, 11.0), (Module::A2, 22.0), (Module::D, 0.0)])
    );
}

#[test]
fn test_default_evaluation_scales_by_quantity() {
    let metric = Metric::new(MetricType::Acidification, set(&[(Module::A1, 2.0)]));
    let evaluated = evaluate(&metric, 5.0, &EvaluationStrategyConfig::Default).unwrap();
    assert_eq!(evaluated.indicators, set(&[(Module::A1, 10.0)]));
}

#[test]
fn test_allocated_a5_ignores_per_unit_factor() {
    let factor = 0.012;
    let config = EvaluationStrategyConfig::Allocated(AllocationParameters {
        project_cost: 1_000_000.0,
        floor_area: 3_000.0,
        total_weight: 20_000.0,
        a5_carbon_factor: factor,
        c1_carbon_factor: 1.5,
    });

    for per_unit_a5a in [0.0, 1.0, 250.0] {
        let metric = Metric::new(
            MetricType::ClimateChangeTotal,
            set(&[(Module::A1toA3, 1.2), (Module::A5a, per_unit_a5a)]),
        );
        let evaluated = evaluate(&metric, 50.0, &config).unwrap();
        let a5a = evaluated.indicators.get(Module::A5a).unwrap();
        assert!((a5a - 1_000_000.0 * factor * 0.0025).abs() < 1e-9);
    }
}

#[test]
fn test_transport_override_removes_stale_aggregate() {
    let base = vec![(
        MetricType::ClimateChangeTotal,
        set(&[(Module::C1, 1.0), (Module::C2, 2.0), (Module::C3, 3.0), (Module::C4, 4.0), (Module::C1toC4, 10.0)]),
    )];
    let c2: TransportValues = [(MetricType::ClimateChangeTotal, 20.0)].into_iter().collect();

    let merged = merge_with_transport_overrides(base, &TransportValues::new(), &c2);
    assert_eq!(merged.len(), 1);
    assert_eq!(
        merged[0].1,
        set(&[(Module::C1, 1.0), (Module::C2, 20.0), (Module::C3, 3.0), (Module::C4, 4.0)])
    );
}

#[test]
fn test_combined_factors_win_resolution_consistently() {
    let declaration = Declaration::new(
        "Brick EPD",
        QuantityType::Mass,
        vec![Metric::new(MetricType::ClimateChangeFossil, set(&[(Module::A1toA3, 0.2)]))],
    );
    let combined = CombinedFactors {
        name: "Brick delivered".into(),
        base: declaration.clone(),
        a4: None,
        c2: None,
    };
    let providers: [&dyn FactorsProvider; 2] = [&declaration, &combined];

    let first = resolve_for_providers("ClimateChangeFossilMaterialResult", &providers);
    let first = first.as_ref().unwrap();
    assert_eq!(first.provider(), Some(ProviderKind::CombinedFactors));

    for _ in 0..3 {
        let again = resolve_for_providers("ClimateChangeFossilMaterialResult", &providers);
        assert!(Arc::ptr_eq(first, again.as_ref().unwrap()));
    }
}
