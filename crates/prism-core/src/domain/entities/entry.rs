//! Catalog entries and their drafts.
//!
//! ## Shape
//!
//! ```text
//! CatalogEntry (sum type)
//! ├── Component(ComponentEntry)
//! │    ├── meta: EntryMeta          shared fields
//! │    └── cli: CliCommands         required for components
//! └── Example(ExampleEntry)
//!      ├── meta: EntryMeta
//!      ├── renderable: Renderable   live-preview unit to mount
//!      └── cli: Option<CliCommands>
//! ```
//!
//! Entries are only produced by [`Schema::admit`](crate::domain::Schema::admit),
//! which turns an [`EntryDraft`] into an entry or reports every violation the
//! draft carries. Drafts hold raw strings so nothing is rejected before the
//! schema gets to see it.
//!
//! ## Source text
//!
//! `EntryMeta::source` is the verbatim text of the canonical implementation
//! file. Built-in entries fill it with `include_str!`, directory catalogs read
//! the file named by the manifest. It is never typed out by hand next to the
//! implementation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::{EntryName, ManifestPath};
use crate::domain::value_objects::{CatalogKind, Dependency, FileKind, PackageManager};

/// One file an install drops into the host project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileManifestItem {
    pub path: ManifestPath,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

/// Install command per package manager. All four are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliCommands {
    pub npm: String,
    pub pnpm: String,
    pub yarn: String,
    pub bun: String,
}

impl CliCommands {
    /// The four `shadcn add` invocations for a registry item URL.
    ///
    /// ```rust
    /// use prism_core::domain::CliCommands;
    ///
    /// let cli = CliCommands::shadcn_add("https://www.prismui.tech/r/styles/default/chat-input.json");
    /// assert_eq!(
    ///     cli.bun,
    ///     r#"bunx shadcn@latest add "https://www.prismui.tech/r/styles/default/chat-input.json""#
    /// );
    /// ```
    pub fn shadcn_add(item_url: &str) -> Self {
        let cmd = |pm: PackageManager| format!("{} shadcn@latest add \"{item_url}\"", pm.runner());
        Self {
            npm: cmd(PackageManager::Npm),
            pnpm: cmd(PackageManager::Pnpm),
            yarn: cmd(PackageManager::Yarn),
            bun: cmd(PackageManager::Bun),
        }
    }

    pub fn get(&self, manager: PackageManager) -> &str {
        match manager {
            PackageManager::Npm => &self.npm,
            PackageManager::Pnpm => &self.pnpm,
            PackageManager::Yarn => &self.yarn,
            PackageManager::Bun => &self.bun,
        }
    }

    /// Commands in `PackageManager::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (PackageManager, &str)> {
        PackageManager::ALL.into_iter().map(|pm| (pm, self.get(pm)))
    }
}

/// Where the docs site finds the live preview for an example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Renderable {
    /// Module path under the site's `@/` root, without extension.
    pub module: String,
    /// Exported symbol to mount.
    pub export: String,
}

impl Renderable {
    pub fn default_export(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            export: "default".into(),
        }
    }
}

/// Fields every entry carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryMeta {
    pub name: EntryName,
    pub category: String,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub source: String,
    pub files: Vec<FileManifestItem>,
    pub dependencies: Vec<Dependency>,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    pub cli: CliCommands,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleEntry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    pub renderable: Renderable,
    pub cli: Option<CliCommands>,
}

/// A documented artifact: a component or one of its examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogEntry {
    Component(ComponentEntry),
    Example(ExampleEntry),
}

impl CatalogEntry {
    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Component(_) => CatalogKind::Component,
            Self::Example(_) => CatalogKind::Example,
        }
    }

    pub fn meta(&self) -> &EntryMeta {
        match self {
            Self::Component(c) => &c.meta,
            Self::Example(e) => &e.meta,
        }
    }

    pub fn name(&self) -> &EntryName {
        &self.meta().name
    }

    pub fn category(&self) -> &str {
        &self.meta().category
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.meta().subcategory.as_deref()
    }

    pub fn source_text(&self) -> &str {
        &self.meta().source
    }

    pub fn files(&self) -> &[FileManifestItem] {
        &self.meta().files
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.meta().dependencies
    }

    pub fn cli(&self) -> Option<&CliCommands> {
        match self {
            Self::Component(c) => Some(&c.cli),
            Self::Example(e) => e.cli.as_ref(),
        }
    }

    pub fn as_component(&self) -> Option<&ComponentEntry> {
        match self {
            Self::Component(c) => Some(c),
            Self::Example(_) => None,
        }
    }

    pub fn as_example(&self) -> Option<&ExampleEntry> {
        match self {
            Self::Example(e) => Some(e),
            Self::Component(_) => None,
        }
    }
}

// ============================================================================
// Drafts
// ============================================================================

/// Raw manifest row as written by an author, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDraft {
    pub path: String,
    pub kind: String,
}

/// A candidate entry. Every field may be missing or malformed; the schema
/// decides.
///
/// # Example
///
/// ```rust
/// use prism_core::domain::{CliCommands, EntryDraft};
///
/// let draft = EntryDraft::component("chat-input")
///     .category("components")
///     .subcategory("form")
///     .source("export function ChatInput() {}")
///     .file("components/prismui/chat-input.tsx", "registry:ui")
///     .cli(CliCommands::shadcn_add("https://www.prismui.tech/r/styles/default/chat-input.json"))
///     .dependency("lucide-react");
/// assert_eq!(draft.name.as_deref(), Some("chat-input"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub kind: CatalogKind,
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub files: Vec<FileDraft>,
    /// Keyed by the raw package-manager string so unknown keys can be reported.
    pub cli: Option<BTreeMap<String, String>>,
    pub dependencies: Vec<String>,
    pub renderable: Option<Renderable>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl EntryDraft {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            name: None,
            category: None,
            subcategory: None,
            description: None,
            source: None,
            files: Vec::new(),
            cli: None,
            dependencies: Vec::new(),
            renderable: None,
            last_modified: None,
        }
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::new(CatalogKind::Component).name(name)
    }

    /// An example draft; the renderable defaults to the `registry/example/<name>` default export.
    pub fn example(name: impl Into<String>) -> Self {
        let name = name.into();
        let renderable = Renderable::default_export(format!("registry/example/{name}"));
        Self::new(CatalogKind::Example)
            .name(name)
            .renderable(renderable)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn file(mut self, path: impl Into<String>, kind: impl Into<String>) -> Self {
        self.files.push(FileDraft {
            path: path.into(),
            kind: kind.into(),
        });
        self
    }

    /// Set all four commands at once.
    pub fn cli(mut self, commands: CliCommands) -> Self {
        let map = commands
            .iter()
            .map(|(pm, cmd)| (pm.as_str().to_string(), cmd.to_string()))
            .collect();
        self.cli = Some(map);
        self
    }

    /// Set a single command; used by manifests that list managers one by one.
    pub fn cli_command(mut self, manager: impl Into<String>, command: impl Into<String>) -> Self {
        self.cli
            .get_or_insert_with(BTreeMap::new)
            .insert(manager.into(), command.into());
        self
    }

    pub fn dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies
            .extend(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn renderable(mut self, renderable: Renderable) -> Self {
        self.renderable = Some(renderable);
        self
    }

    pub fn last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = Some(at);
        self
    }

    /// Name for diagnostics, even when the draft has none.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => "<unnamed>",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadcn_add_builds_all_four() {
        let cli = CliCommands::shadcn_add("https://x.test/r/a.json");
        assert_eq!(cli.npm, r#"npx shadcn@latest add "https://x.test/r/a.json""#);
        assert_eq!(cli.pnpm, r#"pnpm dlx shadcn@latest add "https://x.test/r/a.json""#);
        assert_eq!(cli.yarn, r#"yarn dlx shadcn@latest add "https://x.test/r/a.json""#);
        assert_eq!(cli.iter().count(), 4);
    }

    #[test]
    fn draft_cli_stores_raw_keys() {
        let draft = EntryDraft::component("x").cli(CliCommands::shadcn_add("u"));
        let cli = draft.cli.unwrap();
        assert_eq!(
            cli.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["bun", "npm", "pnpm", "yarn"]
        );
    }

    #[test]
    fn example_draft_defaults_renderable() {
        let draft = EntryDraft::example("chat-input-demo");
        assert_eq!(
            draft.renderable,
            Some(Renderable::default_export("registry/example/chat-input-demo"))
        );
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(EntryDraft::new(CatalogKind::Component).display_name(), "<unnamed>");
    }
}
