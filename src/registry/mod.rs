//! Cached resolution of result constructors
//!
//! Results come in a closed set of kinds: one per metric type and representation (material
//! or element). External callers refer to them by category name, for example
//! `ClimateChangeFossilMaterialResult`. The registry maps such names to a shared
//! [`ResultConstructor`], or to an explicit [`Resolution::Unresolvable`] for names that
//! match no kind.
//!
//! When a material carries several factor providers, [`select_provider`] applies a fixed
//! priority: combined factors with transport legs, then plain declarations, then the first
//! other provider. The winning [`ProviderKind`] is recorded on the resolved constructor.
//!
//! A process-wide registry backs [`resolve_constructor`], [`resolve_for_providers`] and
//! [`constructor_for`]. [`ResultRegistry`] can also be owned directly for isolated use.

mod constructor;
mod provider;
mod resolution;
mod result_registry;

pub use constructor::{ResultConstructor, ResultRecord};
pub use provider::{FactorsProvider, ProviderKind, select_provider};
pub use resolution::Resolution;
pub use result_registry::{ResultRegistry, constructor_for, resolve_constructor, resolve_for_providers};
