//! The in-memory catalog index.
//!
//! A [`Catalog`] holds both catalogs (components and examples) in declaration
//! order, a name → position map per catalog for O(1) lookup, and the
//! violations recorded while admitting drafts. It is immutable once built;
//! a reload builds a new `Catalog` and swaps it in whole.
//!
//! Duplicate names are kept rather than overwritten so that
//! [`Catalog::validate_integrity`] can report them. Lookups resolve to the
//! first declaration.

use std::collections::HashMap;

use tracing::{debug, warn};
use uuid::Uuid;

use super::entry::{CatalogEntry, EntryDraft};
use crate::domain::{
    error::{DomainError, IntegrityIssue, SchemaViolation},
    validation::Schema,
    value_objects::{CatalogKind, DependencyTarget},
};

#[derive(Debug, Clone, Default)]
struct Shelf {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
}

impl Shelf {
    fn push(&mut self, entry: CatalogEntry) {
        let position = self.entries.len();
        self.by_name
            .entry(entry.name().as_str().to_string())
            .or_insert(position);
        self.entries.push(entry);
    }

    fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }
}

/// Both catalogs plus their lookup index.
#[derive(Debug, Clone)]
pub struct Catalog {
    snapshot_id: Uuid,
    components: Shelf,
    examples: Shelf,
    rejected: Vec<IntegrityIssue>,
}

impl Catalog {
    pub fn builder(schema: Schema) -> CatalogBuilder {
        CatalogBuilder::new(schema)
    }

    /// Admit every draft with the standard schema.
    pub fn from_drafts(drafts: impl IntoIterator<Item = EntryDraft>) -> Self {
        let mut builder = Self::builder(Schema::default());
        builder.extend(drafts);
        builder.build()
    }

    pub fn empty() -> Self {
        Self::builder(Schema::default()).build()
    }

    /// Random id of this index, fresh for every build.
    pub fn snapshot_id(&self) -> Uuid {
        self.snapshot_id
    }

    fn shelf(&self, kind: CatalogKind) -> &Shelf {
        match kind {
            CatalogKind::Component => &self.components,
            CatalogKind::Example => &self.examples,
        }
    }

    /// All entries of one catalog, in declaration order.
    pub fn entries(&self, kind: CatalogKind) -> &[CatalogEntry] {
        &self.shelf(kind).entries
    }

    pub fn get(&self, kind: CatalogKind, name: &str) -> Option<&CatalogEntry> {
        self.shelf(kind).get(name)
    }

    pub fn contains(&self, kind: CatalogKind, name: &str) -> bool {
        self.shelf(kind).by_name.contains_key(name)
    }

    pub fn len(&self, kind: CatalogKind) -> usize {
        self.shelf(kind).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.entries.is_empty() && self.examples.entries.is_empty()
    }

    /// Stable-order entries whose category equals `category`.
    pub fn by_category<'a>(
        &'a self,
        kind: CatalogKind,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries(kind)
            .iter()
            .filter(move |e| e.category() == category)
    }

    /// Drafts that failed admission, as integrity issues.
    pub fn rejected(&self) -> &[IntegrityIssue] {
        &self.rejected
    }

    /// Enumerate every invariant violation across both catalogs.
    ///
    /// Order: admission failures, then duplicate names, then dangling
    /// references, each in declaration order.
    pub fn validate_integrity(&self) -> Vec<IntegrityIssue> {
        let mut issues = self.rejected.clone();

        for kind in CatalogKind::ALL {
            let shelf = self.shelf(kind);
            for (position, entry) in shelf.entries.iter().enumerate() {
                let first = shelf.by_name.get(entry.name().as_str()).copied();
                if first != Some(position) {
                    issues.push(IntegrityIssue::Schema {
                        kind,
                        entry: entry.name().to_string(),
                        violation: SchemaViolation::DuplicateName {
                            name: entry.name().to_string(),
                        },
                    });
                }
            }
        }

        for kind in CatalogKind::ALL {
            for entry in self.entries(kind) {
                for dep in entry.dependencies() {
                    if let DependencyTarget::Internal {
                        kind: target_kind,
                        name,
                    } = dep.target()
                    {
                        if !self.contains(target_kind, &name) {
                            issues.push(IntegrityIssue::DanglingReference {
                                kind,
                                entry: entry.name().to_string(),
                                dependency: dep.to_string(),
                                target_kind,
                                target: name,
                            });
                        }
                    }
                }
            }
        }

        issues
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Collects drafts, admitting each through the schema.
///
/// Building never fails: rejected drafts are recorded and surface through
/// `validate_integrity`, so one pass reports every problem.
#[derive(Debug)]
pub struct CatalogBuilder {
    schema: Schema,
    components: Shelf,
    examples: Shelf,
    rejected: Vec<IntegrityIssue>,
}

impl CatalogBuilder {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            components: Shelf::default(),
            examples: Shelf::default(),
            rejected: Vec::new(),
        }
    }

    pub fn add(&mut self, draft: EntryDraft) -> &mut Self {
        match self.schema.admit(draft) {
            Ok(entry) => {
                debug!(kind = %entry.kind(), name = %entry.name(), "entry admitted");
                match entry.kind() {
                    CatalogKind::Component => self.components.push(entry),
                    CatalogKind::Example => self.examples.push(entry),
                }
            }
            Err(DomainError::EntryRejected {
                kind,
                entry,
                violations,
            }) => {
                warn!(%kind, %entry, count = violations.len(), "entry rejected");
                self.rejected
                    .extend(violations.into_iter().map(|violation| IntegrityIssue::Schema {
                        kind,
                        entry: entry.clone(),
                        violation,
                    }));
            }
        }
        self
    }

    pub fn extend(&mut self, drafts: impl IntoIterator<Item = EntryDraft>) -> &mut Self {
        for draft in drafts {
            self.add(draft);
        }
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            snapshot_id: Uuid::new_v4(),
            components: self.components,
            examples: self.examples,
            rejected: self.rejected,
        }
    }
}
