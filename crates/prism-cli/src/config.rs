//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. Only
//! the CLI sees it; the core crate receives plain values (`SiteConfig`, a
//! registry directory) built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site)
//! 2. `PRISM_*` environment variables, `__` between key segments
//!    (`PRISM_SITE__URL`, `PRISM_INSTALL__PACKAGE_MANAGER`)
//! 3. The config file: `--config`, else `./.prism.toml`, else the user
//!    config directory
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use prism_core::domain::{PackageManager, SiteConfig};

use crate::cli::OutputFormat;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG: &str = ".prism.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub registry: RegistryConfig,
    pub install: InstallConfig,
    pub output: OutputConfig,
    /// Site metadata fed to the sidebar and sitemap.
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Manifest directory; the built-in catalog is used when unset.
    pub dir: Option<PathBuf>,
    /// Fail `prism build` on integrity issues and refuse to swap in a
    /// reloaded index that has any.
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub package_manager: PackageManager,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::Npm,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Layer defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::active_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        let defaults =
            Config::try_from(&Self::default()).context("failed to encode default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("PRISM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the user-level configuration file.
    ///
    /// Falls back to `.prism.toml` in the working directory when no home
    /// directory can be determined.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("tech", "prismui", "prism")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// The file `load(None)` reads: a local `.prism.toml` if present,
    /// otherwise [`Self::config_path`].
    pub fn active_path() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() {
            local
        } else {
            Self::config_path()
        }
    }
}
