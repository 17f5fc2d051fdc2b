//! Domain value objects: CatalogKind, PackageManager, FileKind, Dependency.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! define the closed vocabularies of the registry and their string forms.
//! Anything that needs more than one entry to decide (uniqueness, reference
//! resolution) lives in `entities::catalog`.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. If it is a new package manager, add the command form in
//!    `CliCommands::shadcn_add`
//! 4. Done

use crate::domain::error::SchemaViolation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── CatalogKind ───────────────────────────────────────────────────────────────

/// Which of the two catalogs an entry belongs to.
///
/// Names are unique per kind, so every lookup is keyed by `(kind, name)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Component,
    Example,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Component, CatalogKind::Example];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Example => "example",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = SchemaViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "component" | "components" | "ui" => Ok(Self::Component),
            "example" | "examples" | "demo" => Ok(Self::Example),
            other => Err(SchemaViolation::UnknownValue {
                field: "kind",
                value: other.to_string(),
            }),
        }
    }
}

// ── PackageManager ────────────────────────────────────────────────────────────

/// Package managers an install command is published for.
///
/// The set is closed: every complete `CliCommands` carries exactly these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// The one-off package runner each manager ships with.
    pub const fn runner(&self) -> &'static str {
        match self {
            Self::Npm => "npx",
            Self::Pnpm => "pnpm dlx",
            Self::Yarn => "yarn dlx",
            Self::Bun => "bunx",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = SchemaViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" | "npx" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" | "bunx" => Ok(Self::Bun),
            other => Err(SchemaViolation::UnknownValue {
                field: "package manager",
                value: other.to_string(),
            }),
        }
    }
}

// ── FileKind ──────────────────────────────────────────────────────────────────

/// Role of a file in an install manifest, in registry notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    #[serde(rename = "registry:ui")]
    Ui,
    #[serde(rename = "registry:example")]
    Example,
    #[serde(rename = "registry:lib")]
    Lib,
    #[serde(rename = "registry:hook")]
    Hook,
    #[serde(rename = "registry:block")]
    Block,
}

impl FileKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ui => "registry:ui",
            Self::Example => "registry:example",
            Self::Lib => "registry:lib",
            Self::Hook => "registry:hook",
            Self::Block => "registry:block",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = SchemaViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix("registry:").unwrap_or(s);
        match bare.to_ascii_lowercase().as_str() {
            "ui" => Ok(Self::Ui),
            "example" => Ok(Self::Example),
            "lib" => Ok(Self::Lib),
            "hook" => Ok(Self::Hook),
            "block" => Ok(Self::Block),
            _ => Err(SchemaViolation::UnknownValue {
                field: "file kind",
                value: s.to_string(),
            }),
        }
    }
}

// ── Dependency ────────────────────────────────────────────────────────────────

/// Import prefix naming another PrismUI component.
pub const COMPONENT_PREFIX: &str = "@/components/prismui/";
/// Import prefix naming another registry example.
pub const EXAMPLE_PREFIX: &str = "@/registry/example/";
/// Project-local alias root used by the host app (`@/components/ui/button`, `@/lib/utils`).
pub const HOST_ALIAS_PREFIX: &str = "@/";

/// How a dependency string is resolved.
///
/// Only `Internal` references are checked against the catalogs; the rest
/// are supplied by whoever installs the component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyTarget {
    /// Another catalog entry, by kind and name.
    Internal { kind: CatalogKind, name: String },
    /// A path under the host project's `@/` alias.
    HostAlias,
    /// A published package such as `lucide-react`.
    Package,
}

/// A declared dependency, kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dependency(String);

impl Dependency {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify by prefix. Trailing file extensions are ignored so that
    /// `@/components/prismui/chat-input.tsx` still resolves to `chat-input`.
    pub fn target(&self) -> DependencyTarget {
        let raw = self.0.as_str();
        if let Some(rest) = raw.strip_prefix(COMPONENT_PREFIX) {
            return DependencyTarget::Internal {
                kind: CatalogKind::Component,
                name: strip_extension(rest).to_string(),
            };
        }
        if let Some(rest) = raw.strip_prefix(EXAMPLE_PREFIX) {
            return DependencyTarget::Internal {
                kind: CatalogKind::Example,
                name: strip_extension(rest).to_string(),
            };
        }
        if raw.starts_with(HOST_ALIAS_PREFIX) {
            return DependencyTarget::HostAlias;
        }
        DependencyTarget::Package
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.target(), DependencyTarget::Internal { .. })
    }
}

fn strip_extension(s: &str) -> &str {
    match s.rsplit_once('.') {
        Some((stem, ext)) if matches!(ext, "tsx" | "ts" | "jsx" | "js") => stem,
        _ => s,
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Dependency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
