//! Application layer errors.
//!
//! These are failures of lookup and index maintenance. Entry defects are
//! `SchemaViolation`/`IntegrityIssue` values from `crate::domain` and are
//! reported, not raised.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::CatalogKind;
use crate::error::ErrorCategory;

/// Errors raised by catalog services and the sources behind them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry of this kind has the name. An ordinary outcome of lookup.
    #[error("No {kind} named '{name}'")]
    NotFound { kind: CatalogKind, name: String },

    /// Building a replacement index failed; the previous index stays live.
    #[error("Catalog reload failed: {reason}")]
    Reload { reason: String },

    /// The index lock was poisoned by a panicking writer.
    #[error("Catalog snapshot lock poisoned")]
    SnapshotLock,

    /// A manifest file could not be read or parsed.
    #[error("Manifest error at {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },
}

impl CatalogError {
    pub fn not_found(kind: CatalogKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { kind, .. } => vec![
                format!("Try: prism list --kind {kind} to see available names"),
                "Names are lowercase and hyphenated, e.g. chat-input".into(),
            ],
            Self::Reload { .. } => vec![
                "The previous catalog is still being served".into(),
                "Fix the manifest and reload again".into(),
            ],
            Self::SnapshotLock => vec![
                "A previous reload panicked while holding the catalog lock".into(),
                "Restart the process".into(),
            ],
            Self::Manifest { path, .. } => vec![
                format!("Check the TOML syntax of {}", path.display()),
                "Each entry needs a [[component]] or [[example]] header".into(),
                "Source paths are relative to the manifest file".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Reload { .. } | Self::Manifest { .. } => ErrorCategory::Configuration,
            Self::SnapshotLock => ErrorCategory::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_an_ordinary_value() {
        let err = CatalogError::not_found(CatalogKind::Component, "does-not-exist");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No component named 'does-not-exist'");
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions()[0].contains("--kind component"));
    }
}
