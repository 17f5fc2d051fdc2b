//! Catalog sources: a fixed index and a hot-reloadable one.

use std::sync::{Arc, RwLock};

use tracing::{info, instrument, warn};
use uuid::Uuid;

use prism_core::{
    application::{CatalogError, ports::CatalogSource},
    domain::Catalog,
    error::PrismResult,
};

use crate::{builtin_catalog, manifest_loader::ManifestLoader};

/// An index built once and never replaced.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Arc<Catalog>,
    label: String,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog, label: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            label: label.into(),
        }
    }

    /// The entries compiled into this crate.
    pub fn builtin() -> Self {
        Self::new(builtin_catalog::builtin_catalog(), "builtin")
    }
}

impl CatalogSource for StaticCatalog {
    fn snapshot(&self) -> PrismResult<Arc<Catalog>> {
        Ok(Arc::clone(&self.catalog))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

type LoadFn = dyn Fn() -> Result<Catalog, CatalogError> + Send + Sync;

/// Outcome of a successful reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadReport {
    pub previous: Uuid,
    pub current: Uuid,
    pub issues: usize,
}

/// An index that can be rebuilt and swapped in whole.
///
/// Readers clone the current `Arc` and keep reading it even while a reload
/// runs. A reload builds the new index without holding the lock and swaps
/// the pointer under a short write lock. If building fails, the old index
/// stays live.
#[derive(Clone)]
pub struct ReloadableCatalog {
    current: Arc<RwLock<Arc<Catalog>>>,
    load: Arc<LoadFn>,
    label: String,
    strict: bool,
}

impl std::fmt::Debug for ReloadableCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadableCatalog")
            .field("label", &self.label)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

impl ReloadableCatalog {
    /// Build the first index with `load`.
    ///
    /// # Errors
    ///
    /// Whatever `load` returns on the initial build.
    pub fn new<F>(label: impl Into<String>, load: F) -> Result<Self, CatalogError>
    where
        F: Fn() -> Result<Catalog, CatalogError> + Send + Sync + 'static,
    {
        let first = load()?;
        Ok(Self {
            current: Arc::new(RwLock::new(Arc::new(first))),
            load: Arc::new(load),
            label: label.into(),
            strict: false,
        })
    }

    /// Reload from a manifest directory.
    pub fn from_dir(loader: ManifestLoader) -> Result<Self, CatalogError> {
        let label = loader.root().display().to_string();
        Self::new(label, move || loader.load_catalog())
    }

    /// Refuse to swap in an index that has integrity issues.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Rebuild and swap.
    ///
    /// # Errors
    ///
    /// `CatalogError::Reload` if building fails (or, when strict, if the new
    /// index has issues); `CatalogError::SnapshotLock` if the lock is
    /// poisoned. In both cases the previous index is still served.
    #[instrument(skip(self), fields(source = %self.label))]
    pub fn reload(&self) -> Result<ReloadReport, CatalogError> {
        let next = (self.load)().map_err(|e| {
            warn!(error = %e, "reload failed, keeping previous index");
            CatalogError::Reload {
                reason: e.to_string(),
            }
        })?;

        let issues = next.validate_integrity().len();
        if self.strict && issues > 0 {
            warn!(issues, "reload rejected, new index has integrity issues");
            return Err(CatalogError::Reload {
                reason: format!("new index has {issues} integrity issue(s)"),
            });
        }

        let current = next.snapshot_id();
        let mut guard = self
            .current
            .write()
            .map_err(|_| CatalogError::SnapshotLock)?;
        let previous = guard.snapshot_id();
        *guard = Arc::new(next);
        drop(guard);

        info!(%previous, %current, issues, "catalog swapped");
        Ok(ReloadReport {
            previous,
            current,
            issues,
        })
    }
}

impl CatalogSource for ReloadableCatalog {
    fn snapshot(&self) -> PrismResult<Arc<Catalog>> {
        let guard = self
            .current
            .read()
            .map_err(|_| CatalogError::SnapshotLock)?;
        Ok(Arc::clone(&guard))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
