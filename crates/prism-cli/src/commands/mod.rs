//! Command handlers, one module per subcommand.

pub mod build;
pub mod completions;
pub mod config;
pub mod init;
pub mod install;
pub mod list;
pub mod show;
pub mod site;
pub mod validate;

use tracing::{debug, instrument};

use prism_adapters::{ManifestLoader, StaticCatalog};
use prism_core::{
    application::{CatalogError, CatalogService, CatalogSource, DocsService},
    domain::{CatalogEntry, CatalogKind},
    error::PrismError,
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// The catalog the command runs against: `--registry-dir`, then
/// `registry.dir`, then the built-in entries.
///
/// A directory is loaded once per invocation. `registry.strict` is enforced
/// by the commands that write output, not here.
#[instrument(skip_all)]
pub fn open_catalog(global: &GlobalArgs, config: &AppConfig) -> CliResult<CatalogService> {
    let dir = global
        .registry_dir
        .as_ref()
        .or(config.registry.dir.as_ref());

    let source: Box<dyn CatalogSource> = match dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "using manifest directory");
            let catalog = ManifestLoader::new(dir).load_catalog()?;
            Box::new(StaticCatalog::new(catalog, dir.display().to_string()))
        }
        None => Box::new(StaticCatalog::builtin()),
    };

    Ok(CatalogService::new(source))
}

pub fn open_docs(global: &GlobalArgs, config: &AppConfig) -> CliResult<DocsService> {
    Ok(DocsService::new(
        open_catalog(global, config)?,
        config.site.clone(),
    ))
}

/// Exact lookup that turns a miss into [`CliError::EntryNotFound`] with
/// near matches attached.
pub fn lookup(service: &CatalogService, kind: CatalogKind, name: &str) -> CliResult<CatalogEntry> {
    match service.get_by_name(kind, name) {
        Ok(entry) => Ok(entry),
        Err(PrismError::Catalog(CatalogError::NotFound { .. })) => {
            let snapshot = service.snapshot()?;
            let names = snapshot.entries(kind).iter().map(|e| e.name().as_str());
            Err(CliError::EntryNotFound {
                kind,
                name: name.to_string(),
                similar: similar_names(name, names),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Names that contain the query, are contained in it, or share its first
/// hyphen-separated word.
fn similar_names<'a>(query: &str, names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let query = query.to_ascii_lowercase();
    let head = query.split('-').next().unwrap_or_default();
    names
        .filter(|n| {
            n.contains(query.as_str())
                || (!n.is_empty() && query.contains(n))
                || (!head.is_empty() && n.split('-').next() == Some(head))
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 3] = ["chat-input", "expandable-card", "chat-input-demo"];

    #[test]
    fn similar_by_substring() {
        assert_eq!(
            similar_names("input", NAMES.into_iter()),
            vec!["chat-input", "chat-input-demo"]
        );
    }

    #[test]
    fn similar_by_first_word() {
        assert_eq!(
            similar_names("expandable-cards", NAMES.into_iter()),
            vec!["expandable-card"]
        );
    }

    #[test]
    fn nothing_similar() {
        assert!(similar_names("zzz", NAMES.into_iter()).is_empty());
    }

    #[test]
    fn lookup_miss_carries_near_matches() {
        let service = CatalogService::new(Box::new(StaticCatalog::builtin()));
        let err = lookup(&service, CatalogKind::Component, "chat").unwrap_err();
        match err {
            CliError::EntryNotFound { similar, .. } => assert_eq!(similar, vec!["chat-input"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
