//! Built-in PrismUI entries.
//!
//! Each entry's source text is compiled in with `include_str!` from the
//! canonical implementation file under `registry/`, so the displayed code
//! and the shipped component cannot drift apart.
//!
//! ```text
//! registry/
//! ├── components/
//! │   ├── expandable-card.tsx
//! │   └── chat-input.tsx
//! └── example/
//!     ├── expandable-card-basic.tsx
//!     ├── expandable-card-demo.tsx
//!     ├── chat-input-basic.tsx
//!     └── chat-input-demo.tsx
//! ```

use tracing::{debug, instrument};

use prism_core::domain::{Catalog, CliCommands, EntryDraft};

/// Where `shadcn add` fetches registry items from.
pub const REGISTRY_ITEM_BASE: &str = "https://www.prismui.tech/r/styles/default";

/// Registry item URL for a component name.
pub fn item_url(name: &str) -> String {
    format!("{REGISTRY_ITEM_BASE}/{name}.json")
}

// ── Components ────────────────────────────────────────────────────────────────

fn expandable_card() -> EntryDraft {
    EntryDraft::component("expandable-card")
        .category("components")
        .subcategory("display")
        .description("Project status card that expands on click to show tasks and contributors")
        .source(include_str!("../registry/components/expandable-card.tsx"))
        .file("components/prismui/expandable-card.tsx", "registry:ui")
        .cli(CliCommands::shadcn_add(&item_url("expandable-card")))
        .dependencies(["framer-motion", "lucide-react"])
}

fn chat_input() -> EntryDraft {
    EntryDraft::component("chat-input")
        .category("components")
        .subcategory("form")
        .description("Composable chat input with a text field and an actions slot")
        .source(include_str!("../registry/components/chat-input.tsx"))
        .file("components/prismui/chat-input.tsx", "registry:ui")
        .cli(CliCommands::shadcn_add(&item_url("chat-input")))
        .dependencies([
            "lucide-react",
            "@/components/ui/button",
            "@/components/ui/input",
        ])
}

/// Component drafts in declaration order.
pub fn component_drafts() -> Vec<EntryDraft> {
    vec![expandable_card(), chat_input()]
}

// ── Examples ──────────────────────────────────────────────────────────────────

fn example(name: &str, subcategory: &str, source: &'static str) -> EntryDraft {
    EntryDraft::example(name)
        .category("examples")
        .subcategory(subcategory)
        .source(source)
        .file(format!("registry/example/{name}.tsx"), "registry:example")
}

/// Example drafts in declaration order.
pub fn example_drafts() -> Vec<EntryDraft> {
    vec![
        example(
            "expandable-card-basic",
            "basic",
            include_str!("../registry/example/expandable-card-basic.tsx"),
        )
        .dependency("@/components/prismui/expandable-card"),
        example(
            "expandable-card-demo",
            "demo",
            include_str!("../registry/example/expandable-card-demo.tsx"),
        )
        .dependency("@/components/prismui/expandable-card"),
        example(
            "chat-input-basic",
            "basic",
            include_str!("../registry/example/chat-input-basic.tsx"),
        )
        .dependencies([
            "@/components/prismui/chat-input",
            "@/components/ui/button",
            "lucide-react",
        ]),
        example(
            "chat-input-demo",
            "demo",
            include_str!("../registry/example/chat-input-demo.tsx"),
        )
        .dependencies([
            "@/components/prismui/chat-input",
            "@/components/ui/button",
            "@/components/ui/card",
            "lucide-react",
        ]),
    ]
}

/// Every built-in draft, components first.
pub fn all_drafts() -> Vec<EntryDraft> {
    let mut drafts = component_drafts();
    drafts.extend(example_drafts());
    drafts
}

/// Build the built-in catalog.
#[instrument]
pub fn builtin_catalog() -> Catalog {
    let catalog = Catalog::from_drafts(all_drafts());
    debug!(snapshot = %catalog.snapshot_id(), "built-in catalog ready");
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::domain::{CatalogKind, PackageManager};

    #[test]
    fn builtins_admit_cleanly() {
        let catalog = builtin_catalog();
        assert!(catalog.rejected().is_empty(), "{:?}", catalog.rejected());
        assert!(catalog.validate_integrity().is_empty());
        assert_eq!(catalog.len(CatalogKind::Component), 2);
        assert_eq!(catalog.len(CatalogKind::Example), 4);
    }

    #[test]
    fn source_text_is_the_implementation_file() {
        let catalog = builtin_catalog();
        let chat = catalog.get(CatalogKind::Component, "chat-input").unwrap();
        assert!(chat.source_text().contains("ChatInput.displayName = \"ChatInput\""));

        let demo = catalog.get(CatalogKind::Example, "chat-input-demo").unwrap();
        assert!(demo.source_text().starts_with("\"use client\";"));
        assert!(!demo.source_text().contains("demoSource"));
    }

    #[test]
    fn install_urls_point_at_prismui() {
        let catalog = builtin_catalog();
        let card = catalog.get(CatalogKind::Component, "expandable-card").unwrap();
        assert_eq!(
            card.cli().unwrap().get(PackageManager::Pnpm),
            r#"pnpm dlx shadcn@latest add "https://www.prismui.tech/r/styles/default/expandable-card.json""#
        );
    }
}
