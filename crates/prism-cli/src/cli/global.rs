//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`], so `-v`, `--registry-dir` and friends work
//! after any subcommand name.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// `-v` logs INFO, `-vv` DEBUG, `-vvv` TRACE. Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (catalog builds, reloads)
    -vv     - Debug level (per-entry admission)
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes. Honours `NO_COLOR` (<https://no-color.org>);
    /// any value other than `0`, `false`, `no`, `off` or empty turns colour off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Directory of `*.toml` entry manifests to serve instead of the
    /// built-in catalog. Overrides `registry.dir` from the config file.
    #[arg(
        short = 'r',
        long = "registry-dir",
        global = true,
        value_name = "DIR",
        env = "PRISM_REGISTRY_DIR",
        help = "Load entries from a manifest directory"
    )]
    pub registry_dir: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI renders its output. Also settable as `output.format`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored, aligned.
    Human,
    /// No colors.
    Plain,
    /// One JSON document on stdout.
    Json,
}
