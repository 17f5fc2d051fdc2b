//! `prism list`

use tracing::instrument;

use prism_core::domain::{CatalogEntry, CatalogKind};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::open_catalog(&global, &config)?;
    let kind = CatalogKind::from(args.kind);

    let entries = match (&args.category, &args.subcategory) {
        (Some(category), Some(sub)) => service.filter_by_subcategory(kind, category, sub)?,
        (Some(category), None) => service.filter_by_category(kind, category)?,
        (None, _) => service.list_all(kind)?,
    };

    // --output-format json wins over --format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if entries.is_empty() {
                output.info(&format!("No {kind} entries match"))?;
                return Ok(());
            }
            let rows: Vec<Vec<String>> = entries.iter().map(table_row).collect();
            output.table(&["NAME", "CATEGORY", "SUBCATEGORY", "DESCRIPTION"], &rows)?;
        }
        ListFormat::List => {
            for entry in &entries {
                output.data(entry.name().as_str())?;
            }
        }
        ListFormat::Json => output.json(&entries)?,
        ListFormat::Csv => {
            output.data("name,category,subcategory,description")?;
            for entry in &entries {
                output.data(&csv_row(entry))?;
            }
        }
    }

    Ok(())
}

fn table_row(entry: &CatalogEntry) -> Vec<String> {
    vec![
        entry.name().to_string(),
        entry.category().to_string(),
        entry.subcategory().unwrap_or("-").to_string(),
        entry.meta().description.clone().unwrap_or_default(),
    ]
}

fn csv_row(entry: &CatalogEntry) -> String {
    [
        entry.name().as_str(),
        entry.category(),
        entry.subcategory().unwrap_or_default(),
        entry.meta().description.as_deref().unwrap_or_default(),
    ]
    .map(csv_field)
    .join(",")
}

/// Quote a field when it holds a comma, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
