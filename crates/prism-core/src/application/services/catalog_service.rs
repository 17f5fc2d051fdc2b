//! Catalog Service - read-only queries over both catalogs.
//!
//! Every call takes one snapshot from the source and answers from it, so a
//! single call never mixes two index versions. Callers that need several
//! reads against one version use [`CatalogService::snapshot`].

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{CatalogError, ports::CatalogSource},
    domain::{Catalog, CatalogEntry, CatalogKind, DependencyTarget, IntegrityIssue},
    error::PrismResult,
};

/// Read accessors over the catalog index.
pub struct CatalogService {
    source: Box<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// The current immutable index.
    pub fn snapshot(&self) -> PrismResult<Arc<Catalog>> {
        self.source.snapshot()
    }

    /// Label of the backing source, for logs and `prism validate`.
    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    /// All entries of a catalog in declaration order.
    #[instrument(skip(self), fields(kind = %kind))]
    pub fn list_all(&self, kind: CatalogKind) -> PrismResult<Vec<CatalogEntry>> {
        let catalog = self.snapshot()?;
        let entries = catalog.entries(kind).to_vec();
        debug!(count = entries.len(), "listed entries");
        Ok(entries)
    }

    /// Exact-match lookup. A miss is `CatalogError::NotFound`.
    #[instrument(skip(self), fields(kind = %kind))]
    pub fn get_by_name(&self, kind: CatalogKind, name: &str) -> PrismResult<CatalogEntry> {
        let catalog = self.snapshot()?;
        catalog.get(kind, name).cloned().ok_or_else(|| {
            debug!(name, "lookup missed");
            CatalogError::not_found(kind, name).into()
        })
    }

    /// Stable-order subsequence of `list_all(kind)` with this category.
    #[instrument(skip(self), fields(kind = %kind))]
    pub fn filter_by_category(
        &self,
        kind: CatalogKind,
        category: &str,
    ) -> PrismResult<Vec<CatalogEntry>> {
        let catalog = self.snapshot()?;
        Ok(catalog.by_category(kind, category).cloned().collect())
    }

    /// Like `filter_by_category`, narrowed to one subcategory.
    #[instrument(skip(self), fields(kind = %kind))]
    pub fn filter_by_subcategory(
        &self,
        kind: CatalogKind,
        category: &str,
        subcategory: &str,
    ) -> PrismResult<Vec<CatalogEntry>> {
        let catalog = self.snapshot()?;
        Ok(catalog
            .by_category(kind, category)
            .filter(|e| e.subcategory() == Some(subcategory))
            .cloned()
            .collect())
    }

    /// Examples that import the named component, in declaration order.
    ///
    /// # Errors
    ///
    /// `CatalogError::NotFound` if no such component exists.
    #[instrument(skip(self))]
    pub fn examples_for(&self, component: &str) -> PrismResult<Vec<CatalogEntry>> {
        let catalog = self.snapshot()?;
        examples_in(&catalog, component)
    }

    /// Every integrity issue across both catalogs, never stopping early.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub fn validate_integrity(&self) -> PrismResult<Vec<IntegrityIssue>> {
        let catalog = self.snapshot()?;
        let issues = catalog.validate_integrity();
        if issues.is_empty() {
            info!(
                components = catalog.len(CatalogKind::Component),
                examples = catalog.len(CatalogKind::Example),
                "catalog is consistent"
            );
        } else {
            warn!(count = issues.len(), "catalog has integrity issues");
        }
        Ok(issues)
    }
}

pub(crate) fn examples_in(catalog: &Catalog, component: &str) -> PrismResult<Vec<CatalogEntry>> {
    if !catalog.contains(CatalogKind::Component, component) {
        return Err(CatalogError::not_found(CatalogKind::Component, component).into());
    }
    Ok(catalog
        .entries(CatalogKind::Example)
        .iter()
        .filter(|example| {
            example.dependencies().iter().any(|dep| {
                matches!(
                    dep.target(),
                    DependencyTarget::Internal { kind: CatalogKind::Component, name }
                        if name == component
                )
            })
        })
        .cloned()
        .collect())
}
