use super::{ElementResult, MaterialResult, ResultKind};
use crate::indicators::{IndicatorSet, SumOutcome, SumPolicy, sum_sets, sum_values, total_of};
use crate::metrics::MetricType;
use crate::modules::StageFilter;
use crate::registry::constructor_for;
use compact_str::CompactString;

const LOG_TARGET: &str = "  grouping";

/// Groups the material results of one object by metric type and sums each group.
///
/// Returns one element result per metric type, in the order metric types first appear.
pub fn element_results(object_id: &str, material_results: &[MaterialResult], policy: SumPolicy) -> Vec<ElementResult> {
    let mut groups: Vec<(MetricType, Vec<MaterialResult>)> = Vec::new();
    for result in material_results {
        match groups.iter_mut().find(|(metric_type, _)| *metric_type == result.metric_type) {
            Some((_, group)) => group.push(result.clone()),
            None => groups.push((result.metric_type, vec![result.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(metric_type, group)| {
            let indicators = match sum_sets(&group, policy) {
                SumOutcome::Summed(indicators) => indicators,
                SumOutcome::IncompatibleKinds { expected, found } => {
                    log::warn!(target: LOG_TARGET, "Element '{object_id}' mixes {expected} and {found}");
                    IndicatorSet::new()
                }
            };

            constructor_for(ResultKind::element(metric_type)).element_result(object_id, indicators)
        })
        .collect()
}

/// A per-metric-type total over a set of element results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTotal {
    pub metric_type: MetricType,
    pub unit: &'static str,

    /// The element values summed module by module, keeping partially reported modules.
    pub indicators: IndicatorSet,

    /// The sum of each element's stage total.
    pub total: f64,

    /// Elements that reported at least one module of the requested stages.
    pub contributing: Vec<CompactString>,
}

/// Computes per-metric-type totals over element results for the stages in `filter`.
///
/// Each element's stage total is extracted on its own before adding, so an element reporting a
/// coarse aggregate never hides the finer modules reported by another element. Totals are
/// returned in the order metric types first appear.
pub fn project_totals(element_results: &[ElementResult], filter: StageFilter) -> Vec<ProjectTotal> {
    let mut metric_types: Vec<MetricType> = Vec::new();
    for result in element_results {
        if !metric_types.contains(&result.metric_type) {
            metric_types.push(result.metric_type);
        }
    }

    metric_types
        .into_iter()
        .map(|metric_type| {
            let group: Vec<&ElementResult> = element_results.iter().filter(|r| r.metric_type == metric_type).collect();
            let indicators = sum_values(group.iter().map(|r| &r.indicators), SumPolicy::UnionPartial);

            let mut total = 0.0;
            let mut contributing = Vec::new();
            for element in &group {
                let element_total = total_of(&element.indicators, filter);
                if !element_total.nothing_contributed() {
                    total += element_total.total;
                    contributing.push(element.object_id.clone());
                }
            }

            log::debug!(target: LOG_TARGET, "{metric_type} {filter} total {total} from {contributing:?}");

            ProjectTotal {
                metric_type,
                unit: metric_type.unit(),
                indicators,
                total,
                contributing,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::Module;

    fn material(metric_type: MetricType, name: &str, indicators: IndicatorSet) -> MaterialResult {
        constructor_for(ResultKind::material(metric_type)).material_result(name, None, indicators)
    }

    #[test]
    fn test_groups_by_metric_type_in_first_seen_order() {
        let results = [
            material(MetricType::Acidification, "Steel", IndicatorSet::new().with(Module::A1toA3, 1.0)),
            material(MetricType::ClimateChangeTotal, "Steel", IndicatorSet::new().with(Module::A1toA3, 10.0)),
            material(MetricType::Acidification, "Concrete", IndicatorSet::new().with(Module::A1toA3, 2.0)),
        ];

        let elements = element_results("column-7", &results, SumPolicy::IntersectionOnly);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].metric_type, MetricType::Acidification);
        assert_eq!(elements[0].object_id, "column-7");
        assert_eq!(elements[0].indicators.get(Module::A1toA3), Some(3.0));
        assert_eq!(elements[1].metric_type, MetricType::ClimateChangeTotal);
        assert_eq!(elements[1].indicators.get(Module::A1toA3), Some(10.0));
    }

    #[test]
    fn test_grouping_policy_applies_per_group() {
        let results = [
            material(
                MetricType::ClimateChangeFossil,
                "Steel",
                IndicatorSet::new().with(Module::A1toA3, 1.0).with(Module::C3, 0.5),
            ),
            material(MetricType::ClimateChangeFossil, "Paint", IndicatorSet::new().with(Module::A1toA3, 2.0)),
        ];

        let intersection = element_results("wall", &results, SumPolicy::IntersectionOnly);
        assert!(!intersection[0].indicators.contains(Module::C3));

        let union = element_results("wall", &results, SumPolicy::UnionPartial);
        assert_eq!(union[0].indicators.get(Module::C3), Some(0.5));
    }

    #[test]
    fn test_no_materials_no_elements() {
        assert!(element_results("empty", &[], SumPolicy::UnionPartial).is_empty());
    }

    #[test]
    fn test_project_totals_per_metric_type() {
        let elements = [
            constructor_for(ResultKind::element(MetricType::ClimateChangeTotal))
                .element_result("slab", IndicatorSet::new().with(Module::A1toA3, 100.0).with(Module::D, -10.0)),
            constructor_for(ResultKind::element(MetricType::ClimateChangeTotal))
                .element_result("beam", IndicatorSet::new().with(Module::A1, 5.0).with(Module::A2, 5.0)),
            constructor_for(ResultKind::element(MetricType::Acidification)).element_result("beam", IndicatorSet::new().with(Module::A4, 1.0)),
        ];

        let totals = project_totals(&elements, StageFilter::All);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].metric_type, MetricType::ClimateChangeTotal);
        assert_eq!(totals[0].unit, "kg CO2 eq");
        assert_eq!(totals[0].total, 100.0);
        assert_eq!(totals[0].contributing, vec!["slab", "beam"]);
        assert_eq!(totals[0].indicators.get(Module::A1), Some(5.0));
        assert_eq!(totals[1].total, 1.0);

        let stage_a = project_totals(&elements, StageFilter::A);
        assert_eq!(stage_a[0].total, 110.0);

        let stage_c = project_totals(&elements, StageFilter::C);
        assert_eq!(stage_c[0].total, 0.0);
        assert!(stage_c[0].contributing.is_empty());
    }
}
