use crate::metrics::{Declaration, MetricType};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The kinds of factor providers a material can carry, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum ProviderKind {
    /// A declaration combined with transport leg scenarios.
    CombinedFactors,

    /// A plain environmental product declaration.
    Declaration,

    /// Anything else; the first one available is used.
    Other,
}

/// A source of per-unit factors attached to a material.
pub trait FactorsProvider {
    fn provider_kind(&self) -> ProviderKind;

    /// Whether this provider can produce values for `metric_type`.
    fn provides(&self, metric_type: MetricType) -> bool;
}

impl FactorsProvider for Declaration {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::Declaration
    }

    fn provides(&self, metric_type: MetricType) -> bool {
        self.metric(metric_type).is_some()
    }
}

/// Picks the provider used for `metric_type`.
///
/// Among the providers able to produce the metric type, the one with the highest priority
/// kind wins; ties go to the first one listed. Returns the index and kind of the winner.
pub fn select_provider(providers: &[&dyn FactorsProvider], metric_type: MetricType) -> Option<(usize, ProviderKind)> {
    providers
        .iter()
        .enumerate()
        .filter(|(_, provider)| provider.provides(metric_type))
        .map(|(index, provider)| (index, provider.provider_kind()))
        .min_by_key(|(index, kind)| (*kind, *index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::IndicatorSet;
    use crate::metrics::{Metric, QuantityType};

    #[derive(Debug)]
    struct Fixed(ProviderKind, MetricType);

    impl FactorsProvider for Fixed {
        fn provider_kind(&self) -> ProviderKind {
            self.0
        }

        fn provides(&self, metric_type: MetricType) -> bool {
            self.1 == metric_type
        }
    }

    #[test]
    fn test_combined_factors_beat_declarations() {
        let declaration = Fixed(ProviderKind::Declaration, MetricType::ClimateChangeTotal);
        let combined = Fixed(ProviderKind::CombinedFactors, MetricType::ClimateChangeTotal);
        let providers: [&dyn FactorsProvider; 2] = [&declaration, &combined];
        assert_eq!(
            select_provider(&providers, MetricType::ClimateChangeTotal),
            Some((1, ProviderKind::CombinedFactors))
        );
    }

    #[test]
    fn test_first_other_provider_wins() {
        let first = Fixed(ProviderKind::Other, MetricType::Acidification);
        let second = Fixed(ProviderKind::Other, MetricType::Acidification);
        let providers: [&dyn FactorsProvider; 2] = [&first, &second];
        assert_eq!(select_provider(&providers, MetricType::Acidification), Some((0, ProviderKind::Other)));
    }

    #[test]
    fn test_providers_lacking_the_metric_are_skipped() {
        let combined = Fixed(ProviderKind::CombinedFactors, MetricType::Acidification);
        let declaration = Declaration::new(
            "Concrete EPD",
            QuantityType::Mass,
            vec![Metric::new(MetricType::ClimateChangeTotal, IndicatorSet::new())],
        );
        let providers: [&dyn FactorsProvider; 2] = [&combined, &declaration];
        assert_eq!(
            select_provider(&providers, MetricType::ClimateChangeTotal),
            Some((1, ProviderKind::Declaration))
        );
        assert_eq!(select_provider(&providers, MetricType::WaterDeprivation), None);
    }
}
