use super::ProviderKind;
use crate::indicators::IndicatorSet;
use crate::results::{ElementResult, MaterialResult, Representation, ResultKind};
use compact_str::CompactString;

/// Either representation of a built result.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultRecord {
    Material(MaterialResult),
    Element(ElementResult),
}

impl ResultRecord {
    #[must_use]
    pub const fn indicators(&self) -> &IndicatorSet {
        match self {
            Self::Material(result) => &result.indicators,
            Self::Element(result) => &result.indicators,
        }
    }
}

/// Builds results of one [`ResultKind`].
///
/// Constructors are shared through the registry cache and never change once built.
#[derive(Debug, PartialEq, Eq)]
pub struct ResultConstructor {
    kind: ResultKind,
    provider: Option<ProviderKind>,
}

impl ResultConstructor {
    #[must_use]
    pub const fn new(kind: ResultKind, provider: Option<ProviderKind>) -> Self {
        Self { kind, provider }
    }

    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        self.kind
    }

    /// The provider kind this constructor was resolved for, if resolved for an input.
    #[must_use]
    pub const fn provider(&self) -> Option<ProviderKind> {
        self.provider
    }

    #[must_use]
    pub fn material_result(
        &self,
        material_name: impl Into<CompactString>,
        source_name: Option<CompactString>,
        indicators: IndicatorSet,
    ) -> MaterialResult {
        MaterialResult {
            metric_type: self.kind.metric_type,
            material_name: material_name.into(),
            source_name,
            indicators,
        }
    }

    #[must_use]
    pub fn element_result(&self, object_id: impl Into<CompactString>, indicators: IndicatorSet) -> ElementResult {
        ElementResult {
            metric_type: self.kind.metric_type,
            object_id: object_id.into(),
            indicators,
        }
    }

    /// Builds the representation this constructor is for.
    ///
    /// For element results `label` is the object id and `source_name` is unused.
    #[must_use]
    pub fn build(&self, label: impl Into<CompactString>, source_name: Option<CompactString>, indicators: IndicatorSet) -> ResultRecord {
        match self.kind.representation {
            Representation::MaterialResult => ResultRecord::Material(self.material_result(label, source_name, indicators)),
            Representation::ElementResult => ResultRecord::Element(self.element_result(label, indicators)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricType;
    use crate::modules::Module;

    #[test]
    fn test_build_dispatches_on_representation() {
        let values = IndicatorSet::new().with(Module::A1toA3, 4.0);

        let material = ResultConstructor::new(ResultKind::material(MetricType::Acidification), None);
        let ResultRecord::Material(result) = material.build("Steel", Some("Steel EPD".into()), values.clone()) else {
            panic!("expected a material result");
        };
        assert_eq!(result.metric_type, MetricType::Acidification);
        assert_eq!(result.material_name, "Steel");
        assert_eq!(result.source_name.as_deref(), Some("Steel EPD"));

        let element = ResultConstructor::new(ResultKind::element(MetricType::Acidification), None);
        let record = element.build("beam-1", None, values.clone());
        assert!(matches!(&record, ResultRecord::Element(result) if result.object_id == "beam-1"));
        assert_eq!(record.indicators(), &values);
    }
}
