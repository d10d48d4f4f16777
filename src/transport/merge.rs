use super::TransportValues;
use crate::indicators::IndicatorSet;
use crate::metrics::MetricType;
use crate::modules::{COMBINATION_MODULES, Module, descendants};
use rustc_hash::FxHashSet;

const LOG_TARGET: &str = " transport";

/// Applies A4 and C2 transport overrides to base values keyed by metric type.
///
/// An overridden module replaces the base value, and every combination module containing it
/// is dropped since it no longer matches its parts. Overrides for metric types missing from
/// `base` are not discarded: they become new entries holding only the overridden modules,
/// appended in metric type order. Non-finite override values are ignored with a warning.
#[must_use]
pub fn merge_with_transport_overrides(
    base: Vec<(MetricType, IndicatorSet)>,
    a4_overrides: &TransportValues,
    c2_overrides: &TransportValues,
) -> Vec<(MetricType, IndicatorSet)> {
    let overrides = [(Module::A4, a4_overrides), (Module::C2, c2_overrides)];
    let mut consumed: FxHashSet<(Module, MetricType)> = FxHashSet::default();

    let mut merged: Vec<(MetricType, IndicatorSet)> = base
        .into_iter()
        .map(|(metric_type, mut values)| {
            for (module, module_overrides) in overrides {
                if let Some(&value) = module_overrides.get(&metric_type)
                    && override_module(&mut values, metric_type, module, value)
                {
                    let _ = consumed.insert((module, metric_type));
                }
            }
            (metric_type, values)
        })
        .collect();

    let mut leftovers: Vec<(MetricType, IndicatorSet)> = Vec::new();
    for (module, module_overrides) in overrides {
        for (&metric_type, &value) in module_overrides {
            if !value.is_finite() || consumed.contains(&(module, metric_type)) {
                continue;
            }

            log::debug!(target: LOG_TARGET, "{module} override for {metric_type} has no base values; keeping it on its own");
            match leftovers.iter_mut().find(|(t, _)| *t == metric_type) {
                Some((_, values)) => values.insert(module, value),
                None => leftovers.push((metric_type, IndicatorSet::new().with(module, value))),
            }
        }
    }

    leftovers.sort_by_key(|(metric_type, _)| *metric_type);
    merged.extend(leftovers);
    merged
}

/// Returns `false`, leaving `values` untouched, when `value` is not finite.
fn override_module(values: &mut IndicatorSet, metric_type: MetricType, module: Module, value: f64) -> bool {
    if !value.is_finite() {
        log::warn!(target: LOG_TARGET, "Ignoring non-finite {module} override {value} for {metric_type}");
        return false;
    }

    values.insert(module, value);
    for def in COMBINATION_MODULES {
        if descendants(def.module).contains(&module) && values.remove(def.module).is_some() {
            log::debug!(target: LOG_TARGET, "Dropping stale {} after overriding {module}", def.module);
        }
    }
    true
}
