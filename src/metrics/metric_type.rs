use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The impact category a metric or result reports on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, Display, EnumString, IntoStaticStr,
)]
pub enum MetricType {
    ClimateChangeTotal,
    ClimateChangeTotalNoBiogenic,
    ClimateChangeFossil,
    ClimateChangeBiogenic,
    ClimateChangeLandUse,
    OzoneDepletion,
    Acidification,
    EutrophicationAquaticFreshwater,
    EutrophicationAquaticMarine,
    EutrophicationTerrestrial,
    PhotochemicalOzoneCreation,
    AbioticDepletionMineralsAndMetals,
    AbioticDepletionFossilResources,
    WaterDeprivation,

    // Older standard
    GlobalWarmingPotential,
    AcidificationPotential,
    EutrophicationCML,
    EutrophicationTRACI,
    OzoneDepletionPotential,
    PhotochemicalOzoneCreationCML,
    PhotochemicalOzoneCreationTRACI,
    DepletionOfAbioticResources,
    DepletionOfAbioticResourcesFossilFuels,
}

/// Metric type names, longest first, for prefix matching.
static NAMES_LONGEST_FIRST: LazyLock<Vec<(&'static str, MetricType)>> = LazyLock::new(|| {
    let mut names: Vec<_> = MetricType::iter().map(|t| (t.name(), t)).collect();
    names.sort_by_key(|(name, _)| core::cmp::Reverse(name.len()));
    names
});

impl MetricType {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Resolves a type or category name to the metric type whose name is its longest prefix.
    ///
    /// `ClimateChangeTotalNoBiogenicMetric` resolves to [`MetricType::ClimateChangeTotalNoBiogenic`],
    /// not to [`MetricType::ClimateChangeTotal`].
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        NAMES_LONGEST_FIRST
            .iter()
            .find(|(candidate, _)| name.starts_with(candidate))
            .map(|(_, metric_type)| *metric_type)
    }

    /// Whether this type belongs to the older reporting standard.
    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::GlobalWarmingPotential
                | Self::AcidificationPotential
                | Self::EutrophicationCML
                | Self::EutrophicationTRACI
                | Self::OzoneDepletionPotential
                | Self::PhotochemicalOzoneCreationCML
                | Self::PhotochemicalOzoneCreationTRACI
                | Self::DepletionOfAbioticResources
                | Self::DepletionOfAbioticResourcesFossilFuels
        )
    }

    /// The unit impact values of this type are expressed in.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::ClimateChangeTotal
            | Self::ClimateChangeTotalNoBiogenic
            | Self::ClimateChangeFossil
            | Self::ClimateChangeBiogenic
            | Self::ClimateChangeLandUse
            | Self::GlobalWarmingPotential => "kg CO2 eq",
            Self::OzoneDepletion | Self::OzoneDepletionPotential => "kg CFC-11 eq",
            Self::Acidification => "mol H+ eq",
            Self::AcidificationPotential => "kg SO2 eq",
            Self::EutrophicationAquaticFreshwater => "kg P eq",
            Self::EutrophicationAquaticMarine => "kg N eq",
            Self::EutrophicationTerrestrial => "mol N eq",
            Self::EutrophicationCML => "kg PO4 eq",
            Self::EutrophicationTRACI => "kg N eq",
            Self::PhotochemicalOzoneCreation => "kg NMVOC eq",
            Self::PhotochemicalOzoneCreationCML => "kg C2H4 eq",
            Self::PhotochemicalOzoneCreationTRACI => "kg O3 eq",
            Self::AbioticDepletionMineralsAndMetals | Self::DepletionOfAbioticResources => "kg Sb eq",
            Self::AbioticDepletionFossilResources | Self::DepletionOfAbioticResourcesFossilFuels => "MJ",
            Self::WaterDeprivation => "m3 world eq deprived",
        }
    }
}
