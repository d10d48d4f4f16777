use super::{FactorsProvider, ProviderKind, Resolution, ResultConstructor, select_provider};
use crate::results::ResultKind;
use compact_str::CompactString;
use dashmap::DashMap;
use std::sync::{Arc, LazyLock};

const LOG_TARGET: &str = "  registry";

type ProviderKey = (ResultKind, Vec<ProviderKind>);

/// Memoizes result constructors by kind, category name and provider mix.
///
/// Every cache is populated through an atomic get-or-insert, so concurrent first callers for
/// the same key all observe the same constructor instance.
#[derive(Debug, Default)]
pub struct ResultRegistry {
    by_kind: DashMap<ResultKind, Arc<ResultConstructor>>,
    by_category: DashMap<CompactString, Arc<ResultConstructor>>,
    by_providers: DashMap<ProviderKey, Arc<ResultConstructor>>,
}

static REGISTRY: LazyLock<ResultRegistry> = LazyLock::new(ResultRegistry::new);

/// Resolves a category name using the process-wide registry.
pub fn resolve_constructor(category: &str) -> Resolution {
    REGISTRY.resolve(category)
}

/// Resolves a category for an input carrying `providers`, using the process-wide registry.
pub fn resolve_for_providers(category: &str, providers: &[&dyn FactorsProvider]) -> Resolution {
    REGISTRY.resolve_for_providers(category, providers)
}

/// Returns the process-wide constructor for a known result kind.
pub fn constructor_for(kind: ResultKind) -> Arc<ResultConstructor> {
    REGISTRY.constructor(kind)
}

impl ResultRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the constructor for a known result kind.
    pub fn constructor(&self, kind: ResultKind) -> Arc<ResultConstructor> {
        Arc::clone(
            self.by_kind
                .entry(kind)
                .or_insert_with(|| Arc::new(ResultConstructor::new(kind, None)))
                .value(),
        )
    }

    /// Resolves a category name such as `ClimateChangeTotalElementResult`.
    ///
    /// Only resolved categories are cached; unknown names are rejected on every call.
    pub fn resolve(&self, category: &str) -> Resolution {
        if let Some(constructor) = self.by_category.get(category) {
            return Resolution::Resolved(Arc::clone(constructor.value()));
        }

        let Some(kind) = ResultKind::from_category(category) else {
            log::warn!(target: LOG_TARGET, "No result constructor for category '{category}'");
            return Resolution::Unresolvable {
                category: category.into(),
            };
        };

        let constructor = Arc::clone(
            self.by_category
                .entry(CompactString::from(category))
                .or_insert_with(|| self.constructor(kind))
                .value(),
        );
        Resolution::Resolved(constructor)
    }

    /// Resolves a category for an input carrying several factor providers.
    ///
    /// The provider that wins for the category's metric type is recorded on the returned
    /// constructor. Resolution is memoized per category and per set of provider kinds able to
    /// produce the metric type.
    pub fn resolve_for_providers(&self, category: &str, providers: &[&dyn FactorsProvider]) -> Resolution {
        let Some(kind) = ResultKind::from_category(category) else {
            return self.resolve(category);
        };

        let Some((index, winner)) = select_provider(providers, kind.metric_type) else {
            log::warn!(target: LOG_TARGET, "No provider on the input can produce '{category}'");
            return Resolution::Unresolvable {
                category: category.into(),
            };
        };

        let mut present: Vec<ProviderKind> = providers
            .iter()
            .filter(|provider| provider.provides(kind.metric_type))
            .map(|provider| provider.provider_kind())
            .collect();
        present.sort_unstable();
        present.dedup();

        log::debug!(target: LOG_TARGET, "Provider #{index} ({winner}) selected for '{category}' among {present:?}");

        let constructor = Arc::clone(
            self.by_providers
                .entry((kind, present))
                .or_insert_with(|| Arc::new(ResultConstructor::new(kind, Some(winner))))
                .value(),
        );

        Resolution::Resolved(constructor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::IndicatorSet;
    use crate::metrics::{Declaration, Metric, MetricType, QuantityType};
    use crate::results::Representation;

    #[derive(Debug)]
    struct Combined(MetricType);

    impl FactorsProvider for Combined {
        fn provider_kind(&self) -> ProviderKind {
            ProviderKind::CombinedFactors
        }

        fn provides(&self, metric_type: MetricType) -> bool {
            self.0 == metric_type
        }
    }

    fn declaration() -> Declaration {
        Declaration::new(
            "Timber EPD",
            QuantityType::Mass,
            vec![Metric::new(MetricType::ClimateChangeTotal, IndicatorSet::new())],
        )
    }

    #[test]
    fn test_resolve_is_memoized() {
        let registry = ResultRegistry::new();
        let first = registry.resolve("ClimateChangeFossilElementResult");
        let second = registry.resolve("ClimateChangeFossilElementResult");
        let (Some(first), Some(second)) = (first.as_ref(), second.as_ref()) else {
            panic!("expected resolved constructors");
        };
        assert!(Arc::ptr_eq(first, second));
        assert_eq!(first.kind().representation, Representation::ElementResult);
        assert!(first.provider().is_none());
    }

    #[test]
    fn test_category_aliases_share_constructor() {
        let registry = ResultRegistry::new();
        let bare = registry.resolve("Acidification");
        let metric = registry.resolve("AcidificationMetric");
        assert!(Arc::ptr_eq(bare.as_ref().unwrap(), metric.as_ref().unwrap()));
    }

    #[test]
    fn test_unknown_category_is_unresolvable() {
        let registry = ResultRegistry::new();
        let resolution = registry.resolve("RadioactiveWaste");
        assert!(!resolution.is_resolved());
        assert!(matches!(&resolution, Resolution::Unresolvable { category } if category == "RadioactiveWaste"));
        let _ = resolution.into_result().unwrap_err();
    }

    #[test]
    fn test_unknown_categories_are_not_cached() {
        let registry = ResultRegistry::new();
        for category in ["RadioactiveWaste", "Noise", "ClimateChangeTotalResultish"] {
            assert!(!registry.resolve(category).is_resolved());
        }
        assert!(registry.by_category.is_empty());

        assert!(registry.resolve("Acidification").is_resolved());
        assert_eq!(registry.by_category.len(), 1);
    }

    #[test]
    fn test_combined_factors_win_and_stay_stable() {
        let registry = ResultRegistry::new();
        let declaration = declaration();
        let combined = Combined(MetricType::ClimateChangeTotal);
        let providers: [&dyn FactorsProvider; 2] = [&declaration, &combined];

        let first = registry.resolve_for_providers("ClimateChangeTotal", &providers);
        let second = registry.resolve_for_providers("ClimateChangeTotal", &providers);
        let first = first.as_ref().unwrap();
        assert_eq!(first.provider(), Some(ProviderKind::CombinedFactors));
        assert!(Arc::ptr_eq(first, second.as_ref().unwrap()));
    }

    #[test]
    fn test_declaration_used_when_combined_lacks_metric() {
        let registry = ResultRegistry::new();
        let declaration = declaration();
        let combined = Combined(MetricType::Acidification);
        let providers: [&dyn FactorsProvider; 2] = [&combined, &declaration];

        let resolution = registry.resolve_for_providers("ClimateChangeTotalMaterialResult", &providers);
        assert_eq!(resolution.as_ref().unwrap().provider(), Some(ProviderKind::Declaration));

        let missing = registry.resolve_for_providers("WaterDeprivation", &providers);
        assert!(!missing.is_resolved());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri is slow with many threads")]
    fn test_concurrent_first_callers_see_same_constructor() {
        let registry = ResultRegistry::new();
        let constructors: Vec<Arc<ResultConstructor>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.resolve("OzoneDepletionMaterialResult")))
                .collect();
            handles
                .into_iter()
                .map(|handle| Arc::clone(handle.join().unwrap().as_ref().unwrap()))
                .collect()
        });

        assert!(constructors.iter().all(|c| Arc::ptr_eq(c, &constructors[0])));
    }

    #[test]
    fn test_global_registry() {
        let resolution = resolve_constructor("ClimateChangeTotalNoBiogenicMetric");
        let constructor = resolution.as_ref().unwrap();
        assert_eq!(constructor.kind(), ResultKind::material(MetricType::ClimateChangeTotalNoBiogenic));
        assert!(Arc::ptr_eq(constructor, &constructor_for(constructor.kind())));
    }
}
