use super::combination;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A life-cycle module identifier.
///
/// The declaration order doubles as the reporting order, so ordered collections keyed by
/// `Module` read naturally (A before B before C before D, parts before their totals).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, Display, EnumString, IntoStaticStr,
)]
pub enum Module {
    A1,
    A2,
    A3,
    A1toA3,
    A4,
    /// Site activities part of A5
    A5a,
    /// Waste part of A5
    A5w,
    A5,
    B1,
    B2,
    B3,
    B1toB3,
    B4,
    B5,
    B4toB5,
    B1toB5,
    B6,
    B7,
    B1toB7,
    C1,
    C2,
    C3,
    C4,
    C3toC4,
    C1toC4,
    D,
}

impl Module {
    /// The life-cycle stage this module belongs to.
    #[must_use]
    pub const fn stage(self) -> Stage {
        match self {
            Self::A1 | Self::A2 | Self::A3 | Self::A1toA3 | Self::A4 | Self::A5a | Self::A5w | Self::A5 => Stage::A,
            Self::B1
            | Self::B2
            | Self::B3
            | Self::B1toB3
            | Self::B4
            | Self::B5
            | Self::B4toB5
            | Self::B1toB5
            | Self::B6
            | Self::B7
            | Self::B1toB7 => Stage::B,
            Self::C1 | Self::C2 | Self::C3 | Self::C4 | Self::C3toC4 | Self::C1toC4 => Stage::C,
            Self::D => Stage::D,
        }
    }

    /// Whether this module is the pre-summed total of other modules.
    #[must_use]
    pub fn is_combination(self) -> bool {
        combination::constituents(self).is_some()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A life-cycle stage grouping several modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Stage {
    /// Product and construction
    A,
    /// Use
    B,
    /// End of life
    C,
    /// Benefits and loads beyond the system boundary
    D,
}

/// Selects which stages contribute to a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum StageFilter {
    /// All stages, including D
    All,
    A,
    B,
    C,
}

impl StageFilter {
    /// Whether modules of `stage` count towards this filter.
    ///
    /// Stage D only ever counts towards the unqualified [`StageFilter::All`] total.
    #[must_use]
    pub const fn includes(self, stage: Stage) -> bool {
        matches!(
            (self, stage),
            (Self::All, _) | (Self::A, Stage::A) | (Self::B, Stage::B) | (Self::C, Stage::C)
        )
    }
}
