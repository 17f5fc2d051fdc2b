//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases, help text and value enums live here and nowhere
//! else. No catalog logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use prism_core::domain::{CatalogKind, PackageManager};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "prism",
    bin_name = "prism",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "PrismUI component registry",
    long_about = "Query, validate and publish the PrismUI component catalog: \
                  components, their examples and the install commands that \
                  add them to a shadcn project.",
    after_help = "EXAMPLES:\n\
        \x20 prism list\n\
        \x20 prism show chat-input\n\
        \x20 prism install chat-input --pm pnpm\n\
        \x20 prism validate --registry-dir ./registry\n\
        \x20 prism build --out public/r/styles/default",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        visible_alias = "ls",
        about = "List catalog entries",
        after_help = "EXAMPLES:\n\
            \x20 prism list\n\
            \x20 prism list --kind example\n\
            \x20 prism list --category components --subcategory form\n\
            \x20 prism list --format json"
    )]
    List(ListArgs),

    #[command(
        about = "Show one entry with its files, dependencies and examples",
        after_help = "EXAMPLES:\n\
            \x20 prism show expandable-card\n\
            \x20 prism show chat-input-demo --kind example --source"
    )]
    Show(ShowArgs),

    #[command(
        visible_alias = "add",
        about = "Print the install command for a component",
        after_help = "EXAMPLES:\n\
            \x20 prism install chat-input\n\
            \x20 prism install chat-input --pm bun\n\
            \x20 prism install chat-input --all"
    )]
    Install(InstallArgs),

    #[command(
        visible_alias = "check",
        about = "Check catalog integrity",
        after_help = "Exits with status 5 when any issue is found.\n\n\
            EXAMPLES:\n\
            \x20 prism validate\n\
            \x20 prism validate --registry-dir ./registry"
    )]
    Validate,

    #[command(about = "Print the docs sidebar")]
    Sidebar,

    #[command(
        about = "Print sitemap entries",
        after_help = "EXAMPLES:\n\
            \x20 prism sitemap\n\
            \x20 prism sitemap --base-url http://localhost:3000\n\
            \x20 prism sitemap --xml > public/sitemap.xml"
    )]
    Sitemap(SitemapArgs),

    #[command(
        about = "Write registry item JSON for every component",
        after_help = "EXAMPLES:\n\
            \x20 prism build --out public/r/styles/default"
    )]
    Build(BuildArgs),

    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 prism init           # default location\n\
            \x20 prism init --force   # overwrite"
    )]
    Init(InitArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 prism completions bash > ~/.local/share/bash-completion/completions/prism\n\
            \x20 prism completions zsh  > ~/.zfunc/_prism\n\
            \x20 prism completions fish > ~/.config/fish/completions/prism.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 prism config get install.package_manager\n\
            \x20 prism config set install.package_manager pnpm\n\
            \x20 prism config list"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        short = 'k',
        long = "kind",
        value_enum,
        default_value = "component",
        help = "Which collection to list"
    )]
    pub kind: KindArg,

    #[arg(long = "category", value_name = "NAME", help = "Filter by category")]
    pub category: Option<String>,

    /// Only meaningful together with `--category`.
    #[arg(
        long = "subcategory",
        value_name = "NAME",
        requires = "category",
        help = "Filter by subcategory (needs --category)"
    )]
    pub subcategory: Option<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns.
    Table,
    /// One name per line.
    List,
    /// JSON array of full entries.
    Json,
    /// CSV rows with a header.
    Csv,
}

// ── show ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(value_name = "NAME", help = "Entry name, e.g. chat-input")]
    pub name: String,

    #[arg(
        short = 'k',
        long = "kind",
        value_enum,
        default_value = "component",
        help = "Look the name up among components or examples"
    )]
    pub kind: KindArg,

    #[arg(long = "source", help = "Print the full source text")]
    pub source: bool,
}

// ── install ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InstallArgs {
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,

    /// Defaults to `install.package_manager` from the config file.
    #[arg(
        long = "pm",
        value_enum,
        conflicts_with = "all",
        help = "Package manager"
    )]
    pub manager: Option<ManagerArg>,

    #[arg(long = "all", help = "Print the command for every package manager")]
    pub all: bool,
}

// ── sitemap ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SitemapArgs {
    /// Overrides `site.url` from the config file.
    #[arg(long = "base-url", value_name = "URL", help = "Site origin")]
    pub base_url: Option<String>,

    #[arg(long = "xml", help = "Print a sitemap.xml document")]
    pub xml: bool,
}

// ── build ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        default_value = "public/r/styles/default",
        help = "Directory to write <name>.json files into"
    )]
    pub out: PathBuf,

    /// Refuse to write anything if the catalog has integrity issues.
    #[arg(long = "strict", help = "Fail on integrity issues")]
    pub strict: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.prism.toml` in the current directory instead of the user
    /// config directory.
    #[arg(long = "local", help = "Create local configuration in current directory")]
    pub local: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `site.url`.
        key: String,
    },
    /// Set a key in the configuration file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value. TOML literals (`true`, `42`, `["a"]`) are parsed as
        /// such; anything else is stored as a string.
        value: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    #[value(alias = "components")]
    Component,
    #[value(alias = "examples")]
    Example,
}

impl From<KindArg> for CatalogKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Component => CatalogKind::Component,
            KindArg::Example => CatalogKind::Example,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ManagerArg {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl From<ManagerArg> for PackageManager {
    fn from(manager: ManagerArg) -> Self {
        match manager {
            ManagerArg::Npm => PackageManager::Npm,
            ManagerArg::Pnpm => PackageManager::Pnpm,
            ManagerArg::Yarn => PackageManager::Yarn,
            ManagerArg::Bun => PackageManager::Bun,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
