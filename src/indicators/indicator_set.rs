use crate::modules::Module;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

const LOG_TARGET: &str = "indicators";

/// A sparse mapping from life-cycle module to value.
///
/// Values are always finite. Absence of a module means "not reported".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSet(BTreeMap<Module, f64>);

impl IndicatorSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds a set from optionally reported values, skipping anything missing or non-finite.
    pub fn from_optional(values: impl IntoIterator<Item = (Module, Option<f64>)>) -> Self {
        values
            .into_iter()
            .filter_map(|(module, value)| value.map(|v| (module, v)))
            .collect()
    }

    #[must_use]
    pub fn get(&self, module: Module) -> Option<f64> {
        self.0.get(&module).copied()
    }

    #[must_use]
    pub fn contains(&self, module: Module) -> bool {
        self.0.contains_key(&module)
    }

    /// Sets the value of `module`, replacing any previous value.
    ///
    /// Non-finite values are not stored.
    pub fn insert(&mut self, module: Module, value: f64) {
        if value.is_finite() {
            let _ = self.0.insert(module, value);
        } else {
            log::debug!(target: LOG_TARGET, "Ignoring non-finite value {value} for module {module}");
        }
    }

    /// Adds `value` to the value of `module`, treating an absent module as the start of a new sum.
    pub fn accumulate(&mut self, module: Module, value: f64) {
        let sum = self.get(module).map_or(value, |existing| existing + value);
        self.insert(module, sum);
    }

    #[must_use]
    pub fn with(mut self, module: Module, value: f64) -> Self {
        self.insert(module, value);
        self
    }

    pub fn remove(&mut self, module: Module) -> Option<f64> {
        self.0.remove(&module)
    }

    /// Iterates over the reported modules in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Module, f64)> + '_ {
        self.0.iter().map(|(module, value)| (*module, *value))
    }

    pub fn modules(&self) -> impl Iterator<Item = Module> + '_ {
        self.0.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with every value multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.iter().map(|(module, value)| (module, value * factor)).collect()
    }
}

impl FromIterator<(Module, f64)> for IndicatorSet {
    fn from_iter<I: IntoIterator<Item = (Module, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (module, value) in iter {
            set.insert(module, value);
        }
        set
    }
}

impl IntoIterator for IndicatorSet {
    type Item = (Module, f64);
    type IntoIter = btree_map::IntoIter<Module, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IndicatorSet {
    type Item = (&'a Module, &'a f64);
    type IntoIter = btree_map::Iter<'a, Module, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
