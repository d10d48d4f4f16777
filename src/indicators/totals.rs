use super::IndicatorSet;
use crate::modules::{Module, StageFilter, broadest_first, descendants};
use rustc_hash::FxHashSet;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "    totals";

/// The total of a stage together with the modules that made it up.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTotal {
    pub total: f64,

    /// Contributing modules, in the order they were added.
    pub included: Vec<Module>,
}

impl StageTotal {
    /// Whether no module of the requested stages was reported.
    #[must_use]
    pub fn nothing_contributed(&self) -> bool {
        self.included.is_empty()
    }
}

/// Computes the total of the stages selected by `filter`.
///
/// Combination modules are considered broadest first. A reported combination is added and
/// every module it covers is dropped from consideration, so its parts are never added again.
/// Remaining atomic modules are added afterwards.
#[must_use]
pub fn total_of(set: &IndicatorSet, filter: StageFilter) -> StageTotal {
    let mut handled = FxHashSet::default();
    let mut total = 0.0;
    let mut included = Vec::new();

    for &module in broadest_first() {
        if !filter.includes(module.stage()) || handled.contains(&module) {
            continue;
        }

        if let Some(value) = set.get(module) {
            total += value;
            included.push(module);
            let _ = handled.insert(module);
            handled.extend(descendants(module).iter().copied());
        }
    }

    for module in Module::iter().filter(|m| !m.is_combination()) {
        if !filter.includes(module.stage()) || handled.contains(&module) {
            continue;
        }

        if let Some(value) = set.get(module) {
            total += value;
            included.push(module);
        }
    }

    let result = StageTotal { total, included };
    if result.nothing_contributed() {
        log::warn!(target: LOG_TARGET, "No module contributed to the {filter} total");
    } else {
        log::debug!(target: LOG_TARGET, "{filter} total {total} from {:?}", result.included);
    }

    result
}
