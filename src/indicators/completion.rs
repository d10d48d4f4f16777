use super::IndicatorSet;
use crate::modules::{Constituent, constituents, dependency_order};

/// Derives every missing combination module that can be built from its parts.
///
/// Reported values are never overwritten. A combination is only derived when all of its
/// required parts are present, possibly derived earlier in the same pass.
#[must_use]
pub fn complete(set: &IndicatorSet) -> IndicatorSet {
    let mut completed = set.clone();

    for &module in dependency_order() {
        if completed.contains(module) {
            continue;
        }

        if let Some(value) = constituents(module).and_then(|parts| derive(parts, &completed)) {
            completed.insert(module, value);
        }
    }

    completed
}

/// Sums the parts present in `set`.
///
/// Returns `None` when a required part is missing or when no part is present at all.
fn derive(parts: &[Constituent], set: &IndicatorSet) -> Option<f64> {
    let mut total = None;
    for part in parts {
        match set.get(part.module) {
            Some(value) => total = Some(total.unwrap_or(0.0) + value),
            None if part.required => return None,
            None => {}
        }
    }
    total
}
