//! Core domain layer for the PrismUI registry.
//!
//! Pure catalog logic: entry shapes, the admission schema, the taxonomy and
//! the immutable [`Catalog`] index. All loading (built-in sources, manifest
//! directories) lives in adapters behind the ports of the application layer.
//!
//! ## Rules
//!
//! - **No I/O**: no filesystem, network or environment access
//! - **Collect-all**: validation reports every violation in one pass
//! - **Immutable index**: a `Catalog` never changes after `build()`
//!
pub mod entities;
pub mod error;
pub mod site;
pub mod taxonomy;
pub mod value_objects;

mod validation;

pub use entities::{
    Catalog, CatalogBuilder, CatalogEntry, CliCommands, ComponentEntry, EntryDraft, EntryMeta,
    EntryName, ExampleEntry, FileDraft, FileManifestItem, ManifestPath, Renderable,
    common::humanize,
};

pub use error::{DomainError, IntegrityIssue, SchemaViolation};

pub use site::{NavItem, NavLink, SiteConfig, SiteLinks};

pub use taxonomy::{CategoryDef, Taxonomy};

pub use validation::Schema;

pub use value_objects::{
    COMPONENT_PREFIX, CatalogKind, Dependency, DependencyTarget, EXAMPLE_PREFIX, FileKind,
    HOST_ALIAS_PREFIX, PackageManager,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn catalog_kind_parses_plural_forms() {
        assert_eq!(CatalogKind::from_str("components").unwrap(), CatalogKind::Component);
        assert_eq!(CatalogKind::from_str("Example").unwrap(), CatalogKind::Example);
        assert!(CatalogKind::from_str("block").is_err());
    }

    #[test]
    fn package_manager_runner_forms() {
        let runners: Vec<_> = PackageManager::ALL.iter().map(|pm| pm.runner()).collect();
        assert_eq!(runners, vec!["npx", "pnpm dlx", "yarn dlx", "bunx"]);
    }

    // ========================================================================
    // Schema + Catalog Tests
    // ========================================================================

    fn chat_input() -> EntryDraft {
        EntryDraft::component("chat-input")
            .category("components")
            .subcategory("form")
            .source("export function ChatInput() {}")
            .file("components/prismui/chat-input.tsx", "registry:ui")
            .cli(CliCommands::shadcn_add(
                "https://www.prismui.tech/r/styles/default/chat-input.json",
            ))
            .dependencies(["lucide-react", "@/components/ui/button"])
    }

    fn chat_input_demo() -> EntryDraft {
        EntryDraft::example("chat-input-demo")
            .category("examples")
            .subcategory("demo")
            .source("export default function ChatInputDemo() {}")
            .dependencies(["@/components/prismui/chat-input", "lucide-react"])
    }

    #[test]
    fn catalog_round_trips_every_entry() {
        let catalog = Catalog::from_drafts([chat_input(), chat_input_demo()]);
        for kind in CatalogKind::ALL {
            for entry in catalog.entries(kind) {
                assert_eq!(catalog.get(kind, entry.name().as_str()), Some(entry));
            }
        }
    }

    #[test]
    fn satisfied_internal_reference_is_not_an_issue() {
        let catalog = Catalog::from_drafts([chat_input(), chat_input_demo()]);
        assert!(catalog.validate_integrity().is_empty());
    }

    #[test]
    fn missing_component_makes_example_dangle() {
        let catalog = Catalog::from_drafts([chat_input_demo()]);
        let issues = catalog.validate_integrity();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_dangling_reference());
        assert_eq!(issues[0].entry(), "chat-input-demo");
    }

    #[test]
    fn custom_taxonomy_changes_admission() {
        let taxonomy = Taxonomy {
            components: vec![CategoryDef::new("ai", ["input"])],
            examples: vec![CategoryDef::new("examples", ["demo"])],
        };
        let mut builder = Catalog::builder(Schema::new(taxonomy));
        builder.add(chat_input().category("ai").subcategory("input"));
        builder.add(chat_input());
        let catalog = builder.build();

        assert_eq!(catalog.len(CatalogKind::Component), 1);
        assert!(matches!(
            catalog.rejected(),
            [IntegrityIssue::Schema {
                violation: SchemaViolation::UnknownCategory { .. },
                ..
            }]
        ));
    }

    #[test]
    fn entries_serialize_with_kind_tag() {
        let catalog = Catalog::from_drafts([chat_input()]);
        let entry = catalog.get(CatalogKind::Component, "chat-input").unwrap();
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["kind"], "component");
        assert_eq!(json["files"][0]["type"], "registry:ui");
        assert_eq!(json["dependencies"][1], "@/components/ui/button");
    }
}
