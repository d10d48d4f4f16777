use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The physical quantity a declaration's factors are expressed per.
///
/// The engine never converts between quantities; callers supply a quantity already in the
/// declared unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuantityType {
    #[default]
    Undefined,
    Mass,
    Volume,
    Area,
    Length,
    Item,
    Energy,
    Power,
    ElectricCurrent,
    VolumetricFlowRate,
}
