//! `prism config` reads and writes configuration values.

use std::{fs, path::Path};

use toml::{Table, Value};
use tracing::{debug, instrument};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = global
        .config
        .clone()
        .unwrap_or_else(AppConfig::active_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&render(&value)?)?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.data(&to_toml(&config)?)?;
            }
        }

        ConfigCommands::Path => {
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn config_error(message: impl Into<String>) -> CliError {
    CliError::ConfigError {
        message: message.into(),
        source: None,
    }
}

fn to_toml<T: serde::Serialize>(value: &T) -> CliResult<String> {
    toml::to_string_pretty(value).map_err(|e| CliError::ConfigError {
        message: format!("failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn as_table(config: &AppConfig) -> CliResult<Table> {
    parse_table(&to_toml(config)?)
}

fn parse_table(text: &str) -> CliResult<Table> {
    text.parse().map_err(|e: toml::de::Error| CliError::ConfigError {
        message: "not a valid TOML document".into(),
        source: Some(Box::new(e)),
    })
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let table = as_table(config)?;
    let mut segments = key.split('.');
    let first = segments.next().unwrap_or_default();
    let mut current = table.get(first);
    for segment in segments {
        current = current.and_then(|v| v.get(segment));
    }
    current
        .cloned()
        .ok_or_else(|| config_error(format!("unknown or unset config key: '{key}'")))
}

/// Strings print bare, tables as TOML documents, everything else as a
/// TOML literal.
fn render(value: &Value) -> CliResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Table(t) => to_toml(t),
        other => Ok(other.to_string()),
    }
}

/// A TOML literal if `raw` parses as one, otherwise a string.
fn parse_value(raw: &str) -> Value {
    format!("v = {raw}")
        .parse::<Table>()
        .ok()
        .and_then(|mut t| t.remove("v"))
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

/// Update one key in the file at `path`, creating the file if needed.
///
/// The result must still deserialize into [`AppConfig`] and the key must be
/// one `AppConfig` knows about; otherwise nothing is written.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let mut doc: Table = if path.is_file() {
        let text = fs::read_to_string(path)
            .with_cli_context(|| format!("failed to read {}", path.display()))?;
        parse_table(&text)?
    } else {
        Table::new()
    };

    let segments: Vec<&str> = key.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(config_error(format!("malformed key: '{key}'")));
    }
    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| config_error("empty key"))?;

    let mut node = &mut doc;
    for segment in parents {
        let child = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        node = child
            .as_table_mut()
            .ok_or_else(|| config_error(format!("'{segment}' is not a table")))?;
    }
    node.insert(last.to_string(), parse_value(raw));

    let text = to_toml(&doc)?;
    let updated: AppConfig = toml::from_str(&text).map_err(|e| CliError::ConfigError {
        message: format!("invalid value for '{key}'"),
        source: Some(Box::new(e)),
    })?;
    get_config_value(&updated, key)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, text)
        .with_cli_context(|| format!("failed to write {}", path.display()))?;
    debug!(key, path = %path.display(), "config updated");
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
