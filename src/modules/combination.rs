use super::Module;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::LazyLock;

/// One part of a combination module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constituent {
    pub module: Module,

    /// Whether the combination can only be derived when this part is present.
    pub required: bool,
}

impl Constituent {
    #[must_use]
    pub const fn required(module: Module) -> Self {
        Self { module, required: true }
    }
}

#[derive(Debug)]
pub struct CombinationDef {
    pub module: Module,
    pub parts: &'static [Constituent],
}

macro_rules! combination_def {
    ($module:ident = $($part:ident),+ $(,)?) => {
        CombinationDef {
            module: Module::$module,
            parts: &[$(Constituent::required(Module::$part)),+],
        }
    };
}

/// The combination graph, listed children before parents.
pub const COMBINATION_MODULES: &[CombinationDef] = &[
    combination_def!(A1toA3 = A1, A2, A3),
    combination_def!(A5 = A5a, A5w),
    combination_def!(B1toB3 = B1, B2, B3),
    combination_def!(B4toB5 = B4, B5),
    combination_def!(B1toB5 = B1toB3, B4toB5),
    combination_def!(B1toB7 = B1toB5, B6, B7),
    combination_def!(C3toC4 = C3, C4),
    combination_def!(C1toC4 = C1, C2, C3toC4),
];

/// Returns the constituents of `module`, or `None` if it is atomic.
#[must_use]
pub fn constituents(module: Module) -> Option<&'static [Constituent]> {
    COMBINATION_MODULES.iter().find(|def| def.module == module).map(|def| def.parts)
}

/// Combination modules ordered so that every combination comes after all combinations it contains.
#[must_use]
pub fn dependency_order() -> &'static [Module] {
    &GRAPH.dependency_order
}

/// Combination modules ordered by the number of atomic modules they cover, broadest first.
///
/// Combinations covering the same number of atomic modules keep their table order.
#[must_use]
pub fn broadest_first() -> &'static [Module] {
    &GRAPH.broadest_first
}

/// Every module contained in `module`, recursively. Empty for atomic modules.
#[must_use]
pub fn descendants(module: Module) -> &'static [Module] {
    GRAPH.descendants.get(&module).map_or(&[], Vec::as_slice)
}

struct GraphIndex {
    dependency_order: Vec<Module>,
    broadest_first: Vec<Module>,
    descendants: FxHashMap<Module, Vec<Module>>,
}

static GRAPH: LazyLock<GraphIndex> = LazyLock::new(GraphIndex::build);

impl GraphIndex {
    fn build() -> Self {
        let mut dependency_order = Vec::with_capacity(COMBINATION_MODULES.len());
        let mut visited = FxHashSet::default();
        for def in COMBINATION_MODULES {
            visit(def.module, &mut visited, &mut dependency_order);
        }

        let mut descendants = FxHashMap::default();
        for def in COMBINATION_MODULES {
            let mut covered = Vec::new();
            collect_descendants(def.module, &mut covered);
            covered.sort_unstable();
            covered.dedup();
            let _ = descendants.insert(def.module, covered);
        }

        let atomic_count = |module: &Module| {
            descendants
                .get(module)
                .map_or(0, |covered: &Vec<Module>| covered.iter().filter(|m| !m.is_combination()).count())
        };

        let mut broadest_first: Vec<Module> = COMBINATION_MODULES.iter().map(|def| def.module).collect();
        broadest_first.sort_by_key(|module| core::cmp::Reverse(atomic_count(module)));

        Self {
            dependency_order,
            broadest_first,
            descendants,
        }
    }
}

fn visit(module: Module, visited: &mut FxHashSet<Module>, order: &mut Vec<Module>) {
    let Some(parts) = constituents(module) else {
        return;
    };

    if !visited.insert(module) {
        return;
    }

    for part in parts {
        visit(part.module, visited, order);
    }

    order.push(module);
}

fn collect_descendants(module: Module, covered: &mut Vec<Module>) {
    for part in constituents(module).unwrap_or_default() {
        covered.push(part.module);
        collect_descendants(part.module, covered);
    }
}
