//! `prism show`

use tracing::instrument;

use prism_core::domain::{CatalogEntry, CatalogKind, Dependency, DependencyTarget};

use crate::{
    cli::{ShowArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: ShowArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let docs = super::open_docs(&global, &config)?;
    let kind = CatalogKind::from(args.kind);
    let entry = super::lookup(docs.catalog(), kind, &args.name)?;

    if output.is_json() {
        // Components print their full docs page, examples just the entry.
        match kind {
            CatalogKind::Component => output.json(&docs.page(&args.name)?)?,
            CatalogKind::Example => output.json(&entry)?,
        }
        return Ok(());
    }

    output.header(&format!("{} ({kind})", entry.name().title()))?;
    output.detail("name", entry.name().as_str())?;
    output.detail("category", &category_path(&entry))?;
    if let Some(description) = &entry.meta().description {
        output.detail("description", description)?;
    }
    if let Some(at) = entry.meta().last_modified {
        output.detail("last modified", &at.to_rfc3339())?;
    }

    for file in entry.files() {
        output.detail("file", &format!("{} [{}]", file.path, file.kind))?;
    }
    for dep in entry.dependencies() {
        output.detail("depends on", &describe_dependency(dep))?;
    }
    if let Some(example) = entry.as_example() {
        output.detail(
            "preview",
            &format!("@/{}#{}", example.renderable.module, example.renderable.export),
        )?;
    }
    if let Some(cli) = entry.cli() {
        output.detail("install", cli.get(config.install.package_manager))?;
    }

    if kind == CatalogKind::Component {
        let examples = docs.catalog().examples_for(&args.name)?;
        if examples.is_empty() {
            output.detail("examples", "none")?;
        }
        for example in &examples {
            output.detail("example", example.name().as_str())?;
        }
    }

    if args.source {
        output.print("")?;
        output.data(entry.source_text())?;
    }

    Ok(())
}

fn category_path(entry: &CatalogEntry) -> String {
    match entry.subcategory() {
        Some(sub) => format!("{} / {sub}", entry.category()),
        None => entry.category().to_string(),
    }
}

fn describe_dependency(dep: &Dependency) -> String {
    let what = match dep.target() {
        DependencyTarget::Internal { kind, name } => format!("prismui {kind} '{name}'"),
        DependencyTarget::HostAlias => "host project module".to_string(),
        DependencyTarget::Package => "npm package".to_string(),
    };
    format!("{dep} ({what})")
}
