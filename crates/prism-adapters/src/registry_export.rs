//! Registry item export.
//!
//! Writes one `<name>.json` per component in the shape `shadcn add` fetches,
//! so the URLs in each entry's install commands resolve to real files.

use std::{collections::HashSet, fs, path::Path};

use serde::Serialize;
use tracing::{debug, info, instrument};

use prism_core::{
    application::CatalogError,
    domain::{Catalog, CatalogEntry, CatalogKind, DependencyTarget, FileKind},
};

use crate::builtin_catalog::item_url;

pub const ITEM_SCHEMA: &str = "https://ui.shadcn.com/schema/registry-item.json";

/// Alias prefix under which the host's own shadcn primitives live.
const HOST_UI_PREFIX: &str = "@/components/ui/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryItemFile {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// npm packages.
    pub dependencies: Vec<String>,
    /// shadcn primitives by name, other PrismUI items by URL.
    pub registry_dependencies: Vec<String>,
    pub files: Vec<RegistryItemFile>,
}

impl RegistryItem {
    /// Split an entry's dependencies the way the installer needs them. The
    /// first manifest file carries the source text.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let mut dependencies = Vec::new();
        let mut registry_dependencies = Vec::new();

        for dep in entry.dependencies() {
            match dep.target() {
                DependencyTarget::Package => dependencies.push(dep.to_string()),
                DependencyTarget::Internal {
                    kind: CatalogKind::Component,
                    name,
                } => registry_dependencies.push(item_url(&name)),
                DependencyTarget::Internal { .. } => {}
                DependencyTarget::HostAlias => {
                    if let Some(primitive) = dep.as_str().strip_prefix(HOST_UI_PREFIX) {
                        registry_dependencies.push(primitive.to_string());
                    }
                }
            }
        }

        let files = entry
            .files()
            .iter()
            .enumerate()
            .map(|(i, f)| RegistryItemFile {
                path: f.path.to_string(),
                kind: f.kind,
                content: (i == 0).then(|| entry.source_text().to_string()),
            })
            .collect();

        Self {
            schema: ITEM_SCHEMA,
            name: entry.name().to_string(),
            kind: FileKind::Ui,
            description: entry.meta().description.clone(),
            dependencies,
            registry_dependencies,
            files,
        }
    }
}

/// Items for every component, in declaration order. A duplicated name
/// yields one item, from its first declaration.
pub fn registry_items(catalog: &Catalog) -> Vec<RegistryItem> {
    let mut seen = HashSet::new();
    catalog
        .entries(CatalogKind::Component)
        .iter()
        .filter(|e| seen.insert(e.name().as_str()))
        .map(RegistryItem::from_entry)
        .collect()
}

/// Write `<out>/<name>.json` for every component. Returns the count written.
///
/// # Errors
///
/// `CatalogError::Manifest` naming the path that could not be written.
#[instrument(skip(catalog), fields(out = %out.display()))]
pub fn write_registry(catalog: &Catalog, out: &Path) -> Result<usize, CatalogError> {
    let io_error = |path: &Path, reason: String| CatalogError::Manifest {
        path: path.to_path_buf(),
        reason,
    };

    fs::create_dir_all(out).map_err(|e| io_error(out, e.to_string()))?;

    let items = registry_items(catalog);
    for item in &items {
        let path = out.join(format!("{}.json", item.name));
        let json =
            serde_json::to_string_pretty(item).map_err(|e| io_error(&path, e.to_string()))?;
        fs::write(&path, json).map_err(|e| io_error(&path, e.to_string()))?;
        debug!(path = %path.display(), "wrote registry item");
    }

    info!(count = items.len(), "registry items written");
    Ok(items.len())
}
