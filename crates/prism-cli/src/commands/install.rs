//! `prism install` prints the command that adds a component to a project.
//!
//! Nothing is executed; the single-manager form prints the bare command so
//! it can be piped into a shell.

use tracing::instrument;

use prism_core::{
    application::InstallCommand,
    domain::{CatalogKind, PackageManager},
};

use crate::{
    cli::{InstallArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: InstallArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let docs = super::open_docs(&global, &config)?;
    // Resolve through `lookup` first so a typo gets near-match suggestions.
    super::lookup(docs.catalog(), CatalogKind::Component, &args.name)?;
    let page = docs.page(&args.name)?;

    let selected: Vec<InstallCommand> = if args.all {
        page.install
    } else {
        let manager = args
            .manager
            .map(PackageManager::from)
            .unwrap_or(config.install.package_manager);
        page.install
            .into_iter()
            .filter(|c| c.manager == manager)
            .collect()
    };

    if output.is_json() {
        output.json(&selected)?;
    } else if args.all {
        let rows: Vec<Vec<String>> = selected
            .iter()
            .map(|c| vec![c.manager.to_string(), c.command.clone()])
            .collect();
        output.table(&["MANAGER", "COMMAND"], &rows)?;
    } else {
        for command in &selected {
            output.data(&command.command)?;
        }
    }

    Ok(())
}
