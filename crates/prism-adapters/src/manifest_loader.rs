//! Filesystem-based registry loader.
//!
//! Discovers `*.toml` manifests under a registry directory and turns each
//! `[[component]]` / `[[example]]` table into an [`EntryDraft`]. Drafts are
//! not validated here; the catalog builder admits them through the schema so
//! every entry defect is reported together.
//!
//! # Directory layout expected
//!
//! ```text
//! registry/
//! ├── chat-input.toml          ← manifest (any name ending in .toml)
//! ├── components/
//! │   └── chat-input.tsx       ← source file named by the manifest
//! └── example/
//!     └── chat-input-demo.tsx
//! ```
//!
//! # Manifest format
//!
//! ```toml
//! [[component]]
//! name         = "chat-input"
//! category     = "components"
//! subcategory  = "form"                      # optional
//! description  = "Composable chat input"     # optional
//! source       = "components/chat-input.tsx" # relative to this manifest
//! registry_url = "https://www.prismui.tech/r/styles/default/chat-input.json"
//! dependencies = ["lucide-react", "@/components/ui/button"]
//! files        = [{ path = "components/prismui/chat-input.tsx", type = "registry:ui" }]
//!
//! [[example]]
//! name         = "chat-input-demo"
//! category     = "examples"
//! source       = "example/chat-input-demo.tsx"
//! dependencies = ["@/components/prismui/chat-input"]
//! ```
//!
//! Instead of `registry_url`, an entry may list commands explicitly with a
//! `cli = { npm = "...", pnpm = "...", yarn = "...", bun = "..." }` table.
//! `last_modified` (RFC 3339) is optional; when absent the source file's
//! modification time is used.
//!
//! `source` must stay inside the manifest's directory: absolute paths and
//! `.`/`..` segments fail the load.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use prism_core::{
    application::CatalogError,
    domain::{Catalog, CatalogKind, CliCommands, EntryDraft, ManifestPath, Renderable, Schema},
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of one manifest file.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct RegistryManifest {
    #[serde(default)]
    pub component: Vec<EntryTable>,
    #[serde(default)]
    pub example: Vec<EntryTable>,
}

/// One `[[component]]` or `[[example]]` table.
///
/// Everything is optional at this level; missing fields become schema
/// violations, not parse errors.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct EntryTable {
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    /// Path of the implementation file, relative to the manifest.
    pub source: Option<String>,
    #[serde(default)]
    pub files: Vec<FileTable>,
    pub registry_url: Option<String>,
    pub cli: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub renderable: Option<RenderableTable>,
    pub last_modified: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileTable {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct RenderableTable {
    pub module: String,
    #[serde(default = "default_export")]
    pub export: String,
}

fn default_export() -> String {
    "default".into()
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads registry drafts from a directory of TOML manifests.
///
/// ```no_run
/// use prism_adapters::manifest_loader::ManifestLoader;
///
/// let catalog = ManifestLoader::new("./registry").load_catalog()?;
/// println!("{} issues", catalog.validate_integrity().len());
/// # Ok::<(), prism_core::application::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    root: PathBuf,
    schema: Schema,
}

impl ManifestLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            schema: Schema::default(),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every draft found under the root, manifests in file-name order and
    /// tables in declaration order.
    ///
    /// # Errors
    ///
    /// `CatalogError::Manifest` if the root is missing, a manifest cannot be
    /// read or parsed, or a named source file cannot be read. Entry defects
    /// are not errors here.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load_drafts(&self) -> Result<Vec<EntryDraft>, CatalogError> {
        if !self.root.is_dir() {
            return Err(manifest_error(&self.root, "registry directory not found"));
        }

        let mut drafts = Vec::new();
        let walker = WalkDir::new(&self.root).sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| manifest_error(&self.root, e))?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("toml")
            {
                continue;
            }
            let loaded = self.load_manifest(path)?;
            debug!(manifest = %path.display(), entries = loaded.len(), "manifest loaded");
            drafts.extend(loaded);
        }

        if drafts.is_empty() {
            warn!("no registry entries found");
        }
        Ok(drafts)
    }

    /// Load and admit every draft.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        let drafts = self.load_drafts()?;
        let mut builder = Catalog::builder(self.schema.clone());
        builder.extend(drafts);
        Ok(builder.build())
    }

    fn load_manifest(&self, path: &Path) -> Result<Vec<EntryDraft>, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|e| manifest_error(path, e))?;
        let manifest: RegistryManifest =
            toml::from_str(&raw).map_err(|e| manifest_error(path, e))?;
        let base = path.parent().unwrap_or(&self.root);

        let components = manifest
            .component
            .into_iter()
            .map(|t| (CatalogKind::Component, t));
        let examples = manifest
            .example
            .into_iter()
            .map(|t| (CatalogKind::Example, t));

        components
            .chain(examples)
            .map(|(kind, table)| draft_from_table(kind, table, base, path))
            .collect()
    }
}

fn draft_from_table(
    kind: CatalogKind,
    table: EntryTable,
    base: &Path,
    manifest: &Path,
) -> Result<EntryDraft, CatalogError> {
    let mut draft = EntryDraft::new(kind);
    draft.name = table.name;
    draft.category = table.category;
    draft.subcategory = table.subcategory;
    draft.description = table.description;
    draft.dependencies = table.dependencies;

    for file in table.files {
        draft = draft.file(file.path, file.kind);
    }

    if let Some(url) = &table.registry_url {
        draft = draft.cli(CliCommands::shadcn_add(url));
    }
    if let Some(cli) = table.cli {
        for (manager, command) in cli {
            draft = draft.cli_command(manager, command);
        }
    }

    if let Some(rel) = &table.source {
        let rel = ManifestPath::parse(rel.as_str())
            .map_err(|violation| manifest_error(manifest, format!("source: {violation}")))?;
        let source_path = base.join(rel.as_str());
        let text = fs::read_to_string(&source_path).map_err(|e| {
            manifest_error(manifest, format!("source {}: {e}", source_path.display()))
        })?;
        draft.source = Some(text);
        draft.last_modified = modified_at(&source_path);
    }

    if let Some(raw) = &table.last_modified {
        let at = DateTime::parse_from_rfc3339(raw)
            .map_err(|e| manifest_error(manifest, format!("last_modified '{raw}': {e}")))?;
        draft.last_modified = Some(at.with_timezone(&Utc));
    }

    draft.renderable = match (kind, table.renderable) {
        (_, Some(r)) => Some(Renderable {
            module: r.module,
            export: r.export,
        }),
        (CatalogKind::Example, None) => draft
            .name
            .as_deref()
            .map(|n| Renderable::default_export(format!("registry/example/{n}"))),
        (CatalogKind::Component, None) => None,
    };

    Ok(draft)
}

fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

fn manifest_error(path: &Path, reason: impl ToString) -> CatalogError {
    CatalogError::Manifest {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::domain::{IntegrityIssue, SchemaViolation};
    use tempfile::TempDir;

    // ── helpers ───────────────────────────────────────────────────────────

    fn registry(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (rel, content) in files {
            let full = temp.path().join(rel);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
        temp
    }

    const CHAT_INPUT: &str = r#"
[[component]]
name = "chat-input"
category = "components"
subcategory = "form"
source = "components/chat-input.tsx"
registry_url = "https://www.prismui.tech/r/styles/default/chat-input.json"
dependencies = ["lucide-react"]
files = [{ path = "components/prismui/chat-input.tsx", type = "registry:ui" }]

[[example]]
name = "chat-input-demo"
category = "examples"
subcategory = "demo"
source = "example/chat-input-demo.tsx"
dependencies = ["@/components/prismui/chat-input"]
last_modified = "2024-11-02T10:00:00Z"
"#;

    const CHAT_SOURCE: &str = "export function ChatInput() {\n  return null;\n}\n";

    fn chat_registry() -> TempDir {
        registry(&[
            ("chat-input.toml", CHAT_INPUT),
            ("components/chat-input.tsx", CHAT_SOURCE),
            ("example/chat-input-demo.tsx", "export default function Demo() {}"),
        ])
    }

    // ── load_drafts ───────────────────────────────────────────────────────

    #[test]
    fn missing_root_is_a_manifest_error() {
        let loader = ManifestLoader::new("/absolutely/does/not/exist");
        assert!(matches!(
            loader.load_drafts(),
            Err(CatalogError::Manifest { .. })
        ));
    }

    #[test]
    fn reads_source_verbatim() {
        let temp = chat_registry();
        let catalog = ManifestLoader::new(temp.path()).load_catalog().unwrap();
        let chat = catalog.get(CatalogKind::Component, "chat-input").unwrap();
        assert_eq!(chat.source_text(), CHAT_SOURCE);
        assert_eq!(
            chat.cli().unwrap().npm,
            r#"npx shadcn@latest add "https://www.prismui.tech/r/styles/default/chat-input.json""#
        );
        assert!(catalog.validate_integrity().is_empty());
    }

    #[test]
    fn explicit_timestamp_wins_over_file_time() {
        let temp = chat_registry();
        let catalog = ManifestLoader::new(temp.path()).load_catalog().unwrap();
        let demo = catalog.get(CatalogKind::Example, "chat-input-demo").unwrap();
        assert_eq!(
            demo.meta().last_modified.unwrap().to_rfc3339(),
            "2024-11-02T10:00:00+00:00"
        );
        let chat = catalog.get(CatalogKind::Component, "chat-input").unwrap();
        assert!(chat.meta().last_modified.is_some());
    }

    #[test]
    fn example_gets_default_renderable() {
        let temp = chat_registry();
        let drafts = ManifestLoader::new(temp.path()).load_drafts().unwrap();
        assert_eq!(
            drafts[1].renderable,
            Some(Renderable::default_export("registry/example/chat-input-demo"))
        );
    }

    #[test]
    fn manifests_load_in_file_name_order() {
        let temp = registry(&[
            (
                "b.toml",
                "[[component]]\nname = \"b-card\"\ncategory = \"components\"\n",
            ),
            (
                "a.toml",
                "[[component]]\nname = \"a-card\"\ncategory = \"components\"\n",
            ),
            ("README.md", "not a manifest"),
        ]);
        let drafts = ManifestLoader::new(temp.path()).load_drafts().unwrap();
        let names: Vec<_> = drafts.iter().map(|d| d.display_name()).collect();
        assert_eq!(names, vec!["a-card", "b-card"]);
    }

    #[test]
    fn nested_manifests_are_discovered() {
        let temp = registry(&[(
            "nested/deeper/x.toml",
            "[[example]]\nname = \"x\"\ncategory = \"examples\"\n",
        )]);
        let drafts = ManifestLoader::new(temp.path()).load_drafts().unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].kind, CatalogKind::Example);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let temp = registry(&[("bad.toml", "[[component]\nname = ")]);
        let err = ManifestLoader::new(temp.path()).load_drafts().unwrap_err();
        assert!(matches!(err, CatalogError::Manifest { path, .. } if path.ends_with("bad.toml")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = registry(&[("x.toml", "[[component]]\nname = \"x\"\ncolour = \"red\"\n")]);
        assert!(ManifestLoader::new(temp.path()).load_drafts().is_err());
    }

    #[test]
    fn missing_source_file_is_an_error() {
        let temp = registry(&[(
            "x.toml",
            "[[component]]\nname = \"x\"\nsource = \"nope.tsx\"\n",
        )]);
        let err = ManifestLoader::new(temp.path()).load_drafts().unwrap_err();
        assert!(err.to_string().contains("nope.tsx"));
    }

    #[test]
    fn source_outside_manifest_dir_is_an_error() {
        for source in ["../outside.tsx", "/etc/hostname", "components/../../outside.tsx"] {
            let manifest = format!("[[component]]\nname = \"x\"\nsource = \"{source}\"\n");
            let temp = registry(&[
                ("nested/x.toml", manifest.as_str()),
                ("outside.tsx", "export const leaked = true;"),
            ]);
            let err = ManifestLoader::new(temp.path()).load_drafts().unwrap_err();
            assert!(
                matches!(&err, CatalogError::Manifest { path, reason }
                    if path.ends_with("x.toml") && reason.starts_with("source:")),
                "{source}: {err}"
            );
        }
    }

    #[test]
    fn entry_defects_surface_through_integrity() {
        let temp = registry(&[(
            "x.toml",
            "[[component]]\nname = \"Bad Name\"\ncategory = \"components\"\n",
        )]);
        let catalog = ManifestLoader::new(temp.path()).load_catalog().unwrap();
        let issues = catalog.validate_integrity();
        assert!(issues.iter().any(|i| matches!(
            i,
            IntegrityIssue::Schema { violation: SchemaViolation::InvalidName { .. }, .. }
        )));
        assert!(issues.iter().any(|i| matches!(
            i,
            IntegrityIssue::Schema { violation: SchemaViolation::MissingField { field: "source" }, .. }
        )));
    }
}
