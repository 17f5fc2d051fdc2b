//! `prism validate`

use serde::Serialize;
use tracing::instrument;

use prism_core::domain::{CatalogKind, IntegrityIssue};

use crate::{
    cli::global::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One issue as printed by `--output-format json`.
#[derive(Debug, Serialize)]
struct IssueReport<'a> {
    kind: CatalogKind,
    entry: &'a str,
    dangling_reference: bool,
    message: String,
}

impl<'a> From<&'a IntegrityIssue> for IssueReport<'a> {
    fn from(issue: &'a IntegrityIssue) -> Self {
        Self {
            kind: issue.kind(),
            entry: issue.entry(),
            dangling_reference: issue.is_dangling_reference(),
            message: issue.to_string(),
        }
    }
}

/// Report every issue, then fail with exit code 5 if there were any.
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::open_catalog(&global, &config)?;
    let issues = service.validate_integrity()?;

    if output.is_json() {
        let reports: Vec<IssueReport<'_>> = issues.iter().map(IssueReport::from).collect();
        output.json(&reports)?;
    } else if issues.is_empty() {
        let snapshot = service.snapshot()?;
        output.success(&format!(
            "Catalog is consistent: {} components, {} examples ({})",
            snapshot.len(CatalogKind::Component),
            snapshot.len(CatalogKind::Example),
            service.source_name(),
        ))?;
    } else {
        for issue in &issues {
            output.error(&issue.to_string())?;
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CliError::IntegrityFailed {
            count: issues.len(),
        })
    }
}
