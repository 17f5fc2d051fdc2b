//! Driven (output) ports - implemented by infrastructure.

use std::sync::Arc;

use crate::domain::Catalog;
use crate::error::PrismResult;

/// Port for obtaining the current catalog index.
///
/// Implemented by:
/// - `prism_adapters::catalog_store::StaticCatalog` (built once, never changes)
/// - `prism_adapters::catalog_store::ReloadableCatalog` (swapped whole on reload)
///
/// Every call returns a complete index. Callers that need several reads
/// against one version hold on to the returned `Arc`.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// The index as of this call.
    fn snapshot(&self) -> PrismResult<Arc<Catalog>>;

    /// Short label for logs (`builtin`, a directory path, ...).
    fn describe(&self) -> String;
}
