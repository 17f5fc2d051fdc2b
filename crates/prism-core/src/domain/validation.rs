use std::collections::HashSet;

use crate::domain::{
    entities::{
        common::{EntryName, ManifestPath},
        entry::{
            CatalogEntry, CliCommands, ComponentEntry, EntryDraft, EntryMeta, ExampleEntry,
            FileManifestItem,
        },
    },
    error::{DomainError, SchemaViolation},
    taxonomy::Taxonomy,
    value_objects::{CatalogKind, Dependency, FileKind, PackageManager},
};

/// The structural contract an entry must meet to be admitted to a catalog.
///
/// Admission is collect-all: one call reports every violation of a draft.
/// Cross-entry rules (unique names, resolvable references) are checked by
/// `Catalog::validate_integrity`.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    taxonomy: Taxonomy,
}

impl Schema {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Validate a draft and build the entry.
    ///
    /// # Errors
    ///
    /// `DomainError::EntryRejected` carrying every violation found.
    pub fn admit(&self, draft: EntryDraft) -> Result<CatalogEntry, DomainError> {
        let kind = draft.kind;
        let entry = draft.display_name().to_string();
        let mut violations = Vec::new();

        let name = match draft.name {
            None => {
                violations.push(SchemaViolation::MissingField { field: "name" });
                None
            }
            Some(raw) => EntryName::parse(raw)
                .map_err(|v| violations.push(v))
                .ok(),
        };

        let category = match draft.category {
            Some(c) if !c.is_empty() => {
                violations.extend(self.taxonomy.check(kind, &c, draft.subcategory.as_deref()));
                Some(c)
            }
            _ => {
                violations.push(SchemaViolation::MissingField { field: "category" });
                None
            }
        };

        let source = match draft.source {
            None => {
                violations.push(SchemaViolation::MissingField { field: "source" });
                None
            }
            Some(s) if s.trim().is_empty() => {
                violations.push(SchemaViolation::EmptySource);
                None
            }
            Some(s) => Some(s),
        };

        let mut files = Vec::with_capacity(draft.files.len());
        let mut seen_paths = HashSet::new();
        for file in draft.files {
            let path = ManifestPath::parse(file.path).map_err(|v| violations.push(v)).ok();
            let kind = file
                .kind
                .parse::<FileKind>()
                .map_err(|v| violations.push(v))
                .ok();
            if let Some(path) = &path {
                if !seen_paths.insert(path.as_str().to_string()) {
                    violations.push(SchemaViolation::DuplicateFilePath {
                        path: path.to_string(),
                    });
                }
            }
            if let (Some(path), Some(kind)) = (path, kind) {
                files.push(FileManifestItem { path, kind });
            }
        }

        let mut dependencies = Vec::with_capacity(draft.dependencies.len());
        let mut seen_deps = HashSet::new();
        for dep in draft.dependencies {
            if dep.trim().is_empty() {
                violations.push(SchemaViolation::UnknownValue {
                    field: "dependency",
                    value: dep,
                });
                continue;
            }
            if !seen_deps.insert(dep.clone()) {
                violations.push(SchemaViolation::DuplicateDependency { dependency: dep });
                continue;
            }
            dependencies.push(Dependency::new(dep));
        }

        let cli = match draft.cli {
            None => None,
            Some(raw) => check_cli(raw, &mut violations),
        };

        if kind == CatalogKind::Component && cli.is_none() && !has_cli_violation(&violations) {
            violations.push(SchemaViolation::MissingField { field: "cli" });
        }
        if kind == CatalogKind::Example && draft.renderable.is_none() {
            violations.push(SchemaViolation::MissingField {
                field: "renderable",
            });
        }

        if !violations.is_empty() {
            return Err(DomainError::EntryRejected {
                kind,
                entry,
                violations,
            });
        }

        // Every `None` above pushed a violation, so these are all present.
        let (Some(name), Some(category), Some(source)) = (name, category, source) else {
            return Err(DomainError::EntryRejected {
                kind,
                entry,
                violations: vec![SchemaViolation::MissingField { field: "name" }],
            });
        };

        let meta = EntryMeta {
            name,
            category,
            subcategory: draft.subcategory,
            description: draft.description,
            source,
            files,
            dependencies,
            last_modified: draft.last_modified,
        };

        Ok(match (kind, cli, draft.renderable) {
            (CatalogKind::Component, Some(cli), _) => {
                CatalogEntry::Component(ComponentEntry { meta, cli })
            }
            (CatalogKind::Example, cli, Some(renderable)) => CatalogEntry::Example(ExampleEntry {
                meta,
                renderable,
                cli,
            }),
            (kind, _, _) => {
                return Err(DomainError::EntryRejected {
                    kind,
                    entry,
                    violations: vec![SchemaViolation::MissingField { field: "cli" }],
                });
            }
        })
    }
}

fn has_cli_violation(violations: &[SchemaViolation]) -> bool {
    violations.iter().any(|v| {
        matches!(
            v,
            SchemaViolation::IncompleteCliCommands { .. }
                | SchemaViolation::EmptyCliCommand { .. }
                | SchemaViolation::UnknownValue {
                    field: "package manager",
                    ..
                }
        )
    })
}

fn check_cli(
    raw: std::collections::BTreeMap<String, String>,
    violations: &mut Vec<SchemaViolation>,
) -> Option<CliCommands> {
    let before = violations.len();
    let mut known = std::collections::BTreeMap::new();

    for (key, command) in raw {
        match key.parse::<PackageManager>() {
            Ok(pm) if command.trim().is_empty() => {
                violations.push(SchemaViolation::EmptyCliCommand { manager: pm })
            }
            Ok(pm) => {
                known.insert(pm, command);
            }
            Err(v) => violations.push(v),
        }
    }

    let missing: Vec<PackageManager> = PackageManager::ALL
        .into_iter()
        .filter(|pm| !known.contains_key(pm))
        .filter(|pm| {
            !violations[before..]
                .iter()
                .any(|v| matches!(v, SchemaViolation::EmptyCliCommand { manager } if manager == pm))
        })
        .collect();
    if !missing.is_empty() {
        violations.push(SchemaViolation::IncompleteCliCommands { missing });
    }

    if violations.len() > before {
        return None;
    }

    let mut take = |pm: PackageManager| known.remove(&pm).unwrap_or_default();
    Some(CliCommands {
        npm: take(PackageManager::Npm),
        pnpm: take(PackageManager::Pnpm),
        yarn: take(PackageManager::Yarn),
        bun: take(PackageManager::Bun),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_component() -> EntryDraft {
        EntryDraft::component("chat-input")
            .category("components")
            .subcategory("form")
            .source("export {}")
            .file("components/prismui/chat-input.tsx", "registry:ui")
            .cli(CliCommands::shadcn_add("https://x.test/chat-input.json"))
    }

    fn violations(err: DomainError) -> Vec<SchemaViolation> {
        match err {
            DomainError::EntryRejected { violations, .. } => violations,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn admits_valid_component() {
        let entry = Schema::default().admit(valid_component()).unwrap();
        assert_eq!(entry.kind(), CatalogKind::Component);
        assert_eq!(entry.name().as_str(), "chat-input");
        assert_eq!(entry.files()[0].kind, FileKind::Ui);
    }

    #[test]
    fn admits_example_without_cli() {
        let draft = EntryDraft::example("chat-input-demo")
            .category("examples")
            .subcategory("demo")
            .source("export default function Demo() {}");
        let entry = Schema::default().admit(draft).unwrap();
        assert!(entry.cli().is_none());
        assert!(entry.as_example().is_some());
    }

    #[test]
    fn reports_every_violation_at_once() {
        let draft = EntryDraft::new(CatalogKind::Component)
            .name("Bad Name")
            .category("widgets")
            .source("   ")
            .file("/abs/path.tsx", "registry:style");
        let v = violations(Schema::default().admit(draft).unwrap_err());

        assert!(v.iter().any(|v| matches!(v, SchemaViolation::InvalidName { .. })));
        assert!(v.iter().any(|v| matches!(v, SchemaViolation::UnknownCategory { .. })));
        assert!(v.contains(&SchemaViolation::EmptySource));
        assert!(v.iter().any(|v| matches!(v, SchemaViolation::MalformedPath { .. })));
        assert!(v.iter().any(|v| matches!(v, SchemaViolation::UnknownValue { field: "file kind", .. })));
        assert!(v.contains(&SchemaViolation::MissingField { field: "cli" }));
    }

    #[test]
    fn missing_name_and_empty_name_differ() {
        let mut draft = valid_component();
        draft.name = None;
        let v = violations(Schema::default().admit(draft).unwrap_err());
        assert!(v.contains(&SchemaViolation::MissingField { field: "name" }));

        let v = violations(Schema::default().admit(valid_component().name("")).unwrap_err());
        assert!(v.contains(&SchemaViolation::EmptyName));
    }

    #[test]
    fn incomplete_cli_names_missing_managers() {
        let draft = EntryDraft::component("card")
            .category("components")
            .source("x")
            .cli_command("npm", "npx shadcn@latest add card")
            .cli_command("pnpm", "pnpm dlx shadcn@latest add card");
        let v = violations(Schema::default().admit(draft).unwrap_err());
        assert_eq!(
            v,
            vec![SchemaViolation::IncompleteCliCommands {
                missing: vec![PackageManager::Yarn, PackageManager::Bun]
            }]
        );
    }

    #[test]
    fn empty_cli_command_not_double_reported() {
        let mut draft = valid_component();
        draft
            .cli
            .as_mut()
            .unwrap()
            .insert("yarn".into(), String::new());
        let v = violations(Schema::default().admit(draft).unwrap_err());
        assert_eq!(
            v,
            vec![SchemaViolation::EmptyCliCommand {
                manager: PackageManager::Yarn
            }]
        );
    }

    #[test]
    fn duplicate_dependencies_and_paths_rejected() {
        let draft = valid_component()
            .file("components/prismui/chat-input.tsx", "registry:ui")
            .dependency("lucide-react")
            .dependency("lucide-react");
        let v = violations(Schema::default().admit(draft).unwrap_err());
        assert!(v.contains(&SchemaViolation::DuplicateDependency {
            dependency: "lucide-react".into()
        }));
        assert!(v.contains(&SchemaViolation::DuplicateFilePath {
            path: "components/prismui/chat-input.tsx".into()
        }));
    }

    #[test]
    fn example_requires_renderable() {
        let mut draft = EntryDraft::example("demo")
            .category("examples")
            .source("x");
        draft.renderable = None;
        let v = violations(Schema::default().admit(draft).unwrap_err());
        assert!(v.contains(&SchemaViolation::MissingField {
            field: "renderable"
        }));
    }
}
