use super::ResultConstructor;
use compact_str::CompactString;
use ohno::app_err;
use std::sync::Arc;

/// The outcome of resolving a result constructor.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A constructor was found.
    Resolved(Arc<ResultConstructor>),

    /// No constructor exists for the category, or no provider on the input can produce it.
    Unresolvable { category: CompactString },
}

impl Resolution {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the constructor if resolved, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&Arc<ResultConstructor>> {
        match self {
            Self::Resolved(constructor) => Some(constructor),
            Self::Unresolvable { .. } => None,
        }
    }

    /// Converts into a hard error, for callers that cannot skip the category.
    pub fn into_result(self) -> crate::Result<Arc<ResultConstructor>> {
        match self {
            Self::Resolved(constructor) => Ok(constructor),
            Self::Unresolvable { category } => Err(app_err!("no result constructor for category '{category}'")),
        }
    }
}
