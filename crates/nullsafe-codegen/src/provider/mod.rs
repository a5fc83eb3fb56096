//! Metadata providers: where marked types and their members come from.

pub mod source_index;
pub mod type_scope;

pub use source_index::SourceIndex;

use nullsafe_core::errors::ProviderError;
use nullsafe_core::model::MarkedType;

/// Supplies marked types to the generator.
///
/// Implementations are responsible for flattening inheritance: the members
/// of a resolved `MarkedType` include everything inherited from supertypes.
pub trait MetadataProvider {
    /// Qualified names of every marked type, in discovery order.
    fn marked_types(&self) -> Vec<String>;

    /// Resolve one marked type into a read-only metadata view.
    fn resolve(&self, qualified_name: &str) -> Result<MarkedType, ProviderError>;
}
