//! `prism build` writes the registry items `shadcn add` downloads.

use serde_json::json;
use tracing::{info, instrument};

use prism_adapters::write_registry;

use crate::{
    cli::{BuildArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(out = %args.out.display()))]
pub fn execute(
    args: BuildArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if args.out.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("--out {} is a file, expected a directory", args.out.display()),
            source: None,
        });
    }

    let service = super::open_catalog(&global, &config)?;
    let snapshot = service.snapshot()?;
    let issues = snapshot.validate_integrity();

    if !issues.is_empty() {
        let strict = args.strict || config.registry.strict;
        for issue in &issues {
            if strict {
                output.error(&issue.to_string())?;
            } else {
                output.warning(&issue.to_string())?;
            }
        }
        if strict {
            return Err(CliError::IntegrityFailed {
                count: issues.len(),
            });
        }
    }

    let written = write_registry(&snapshot, &args.out)?;
    info!(written, snapshot = %snapshot.snapshot_id(), "registry built");

    if output.is_json() {
        output.json(&json!({
            "out": args.out.display().to_string(),
            "written": written,
            "issues": issues.len(),
        }))?;
    } else {
        output.success(&format!(
            "Wrote {written} registry item(s) to {}",
            args.out.display()
        ))?;
    }
    Ok(())
}
