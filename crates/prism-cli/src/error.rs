//! CLI error handling.
//!
//! Every failure a command can hit ends up as a [`CliError`], which knows
//! its message, its suggestions and its exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use prism_core::{
    application::CatalogError,
    domain::CatalogKind,
    error::{ErrorCategory as CoreCategory, PrismError},
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Lookup ─────────────────────────────────────────────────────────────
    /// Name lookup failed; `similar` holds near matches from the same
    /// collection.
    #[error("No {kind} named '{name}'")]
    EntryNotFound {
        kind: CatalogKind,
        name: String,
        similar: Vec<String>,
    },

    /// The catalog has integrity issues (already printed).
    #[error("Catalog has {count} integrity issue(s)")]
    IntegrityFailed { count: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    #[error("{0}")]
    Core(#[from] PrismError),

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::EntryNotFound {
                kind,
                name,
                similar,
            } => {
                let mut out = Vec::new();
                if !similar.is_empty() {
                    out.push(format!("Did you mean: {}?", similar.join(", ")));
                }
                if *kind == CatalogKind::Component {
                    out.push(format!(
                        "If '{name}' is an example, try: prism show {name} --kind example"
                    ));
                }
                out.push(format!("List available names: prism list --kind {kind}"));
                out
            }

            Self::IntegrityFailed { .. } => vec![
                "Fix the entries listed above and run `prism validate` again".into(),
                "Dangling references usually mean a missing or misspelled component".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::active_path().display()
                ),
                "Use 'prism init' to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::EntryNotFound { .. } => ErrorCategory::NotFound,
            Self::IntegrityFailed { .. } => ErrorCategory::Integrity,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Integrity => ErrorCategory::Integrity,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit status passed to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Integrity     |  5   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Integrity => 5,
        }
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    /// Header, cause chain (verbose only), then suggestions.
    fn render(&self, verbose: bool, color: bool) -> String {
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push(if color {
            format!("{} {}", "\u{2717} error:".red().bold(), self.to_string().red())
        } else {
            format!("Error: {self}")
        });

        if verbose {
            for cause in std::iter::successors(self.source(), |&e| e.source()) {
                lines.push(if color {
                    format!("  {}", format!("\u{2192} {cause}").dimmed())
                } else {
                    format!("  Caused by: {cause}")
                });
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(if color {
                "Suggestions:".yellow().bold().to_string()
            } else {
                "Suggestions:".to_string()
            });
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            let hint = "Run again with -v / --verbose for more details.";
            lines.push(String::new());
            lines.push(if color { hint.dimmed().to_string() } else { hint.to_string() });
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn log(&self) {
        let category = self.category();
        let cause = self.source().map(ToString::to_string);
        match category {
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, cause = cause.as_deref(), "{self}");
            }
            _ => tracing::warn!(?category, cause = cause.as_deref(), "{self}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    /// The catalog is inconsistent.
    Integrity,
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Convert foreign errors into [`CliError`] with a context message at the
/// call-site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, PrismError> {
    /// Core errors already name what failed; the context is dropped.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}
