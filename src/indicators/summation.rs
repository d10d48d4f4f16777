use super::IndicatorSet;
use core::fmt::{Debug, Display};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

const LOG_TARGET: &str = " summation";

/// Which modules survive when several indicator sets are added together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, StrumDisplay)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SumPolicy {
    /// Keep only modules reported by every input.
    #[default]
    IntersectionOnly,

    /// Keep modules reported by any input, summing over the inputs that report them.
    UnionPartial,
}

/// Anything carrying an indicator set that can be summed with others of the same kind.
pub trait ModuleData {
    type Kind: Copy + PartialEq + Debug + Display;

    fn kind(&self) -> Self::Kind;

    fn indicators(&self) -> &IndicatorSet;
}

impl ModuleData for IndicatorSet {
    type Kind = &'static str;

    fn kind(&self) -> Self::Kind {
        "IndicatorSet"
    }

    fn indicators(&self) -> &IndicatorSet {
        self
    }
}

/// The outcome of summing several sets.
#[derive(Debug, Clone, PartialEq)]
pub enum SumOutcome<K> {
    /// The inputs were compatible; holds their sum (empty for no inputs).
    Summed(IndicatorSet),

    /// The inputs were of different kinds and were not summed.
    IncompatibleKinds { expected: K, found: K },
}

impl<K> SumOutcome<K> {
    #[must_use]
    pub const fn is_summed(&self) -> bool {
        matches!(self, Self::Summed(_))
    }

    /// Returns the summed values, or an empty set if the inputs were incompatible.
    #[must_use]
    pub fn into_values(self) -> IndicatorSet {
        match self {
            Self::Summed(values) => values,
            Self::IncompatibleKinds { .. } => IndicatorSet::new(),
        }
    }
}

/// Sums the indicator sets of `items` under `policy`.
///
/// All items must be of the same kind; otherwise nothing is summed and the first mismatch is
/// reported.
pub fn sum_sets<T: ModuleData>(items: &[T], policy: SumPolicy) -> SumOutcome<T::Kind> {
    let Some(first) = items.first() else {
        return SumOutcome::Summed(IndicatorSet::new());
    };

    let expected = first.kind();
    if let Some(mismatch) = items.iter().find(|item| item.kind() != expected) {
        let found = mismatch.kind();
        log::warn!(target: LOG_TARGET, "Refusing to sum {expected} with {found}");
        return SumOutcome::IncompatibleKinds { expected, found };
    }

    SumOutcome::Summed(sum_values(items.iter().map(|item| item.indicators()), policy))
}

/// Sums plain indicator sets under `policy`, without any kind check.
pub fn sum_values<'a>(sets: impl IntoIterator<Item = &'a IndicatorSet>, policy: SumPolicy) -> IndicatorSet {
    let sets: Vec<&IndicatorSet> = sets.into_iter().collect();
    let Some(first) = sets.first() else {
        return IndicatorSet::new();
    };

    match policy {
        SumPolicy::IntersectionOnly => first
            .modules()
            .filter(|module| sets.iter().all(|set| set.contains(*module)))
            .map(|module| (module, sets.iter().filter_map(|set| set.get(module)).sum::<f64>()))
            .collect(),

        SumPolicy::UnionPartial => {
            let mut summed = IndicatorSet::new();
            for set in &sets {
                for (module, value) in set.iter() {
                    summed.accumulate(module, value);
                }
            }
            summed
        }
    }
}
