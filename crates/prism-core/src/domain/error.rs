// ============================================================================
// domain/error.rs - SCHEMA AND INTEGRITY ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{CatalogKind, PackageManager};

/// A single structural defect in a catalog entry.
///
/// Violations are data, not control flow: admission collects every violation
/// of a draft and integrity validation collects every violation of a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("name is empty")]
    EmptyName,

    #[error("name '{name}' is not URL-safe: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("category '{category}' is not one of [{}]", .allowed.join(", "))]
    UnknownCategory {
        category: String,
        allowed: Vec<String>,
    },

    #[error("subcategory '{subcategory}' is not allowed under '{category}'")]
    UnknownSubcategory {
        category: String,
        subcategory: String,
    },

    #[error("CLI commands incomplete, missing: {}", join_managers(.missing))]
    IncompleteCliCommands { missing: Vec<PackageManager> },

    #[error("CLI command for {manager} is empty")]
    EmptyCliCommand { manager: PackageManager },

    #[error("file path '{path}' is malformed: {reason}")]
    MalformedPath { path: String, reason: String },

    #[error("duplicate file path in manifest: {path}")]
    DuplicateFilePath { path: String },

    #[error("source text is empty")]
    EmptySource,

    #[error("dependency listed twice: {dependency}")]
    DuplicateDependency { dependency: String },

    #[error("name '{name}' is declared more than once")]
    DuplicateName { name: String },

    #[error("unknown {field}: '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

fn join_managers(managers: &[PackageManager]) -> String {
    managers
        .iter()
        .map(PackageManager::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One problem reported by integrity validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    #[error("{kind} '{entry}': {violation}")]
    Schema {
        kind: CatalogKind,
        entry: String,
        violation: SchemaViolation,
    },

    #[error(
        "{kind} '{entry}' depends on '{dependency}', but no {target_kind} named '{target}' exists"
    )]
    DanglingReference {
        kind: CatalogKind,
        entry: String,
        dependency: String,
        target_kind: CatalogKind,
        target: String,
    },
}

impl IntegrityIssue {
    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Schema { kind, .. } | Self::DanglingReference { kind, .. } => *kind,
        }
    }

    pub fn entry(&self) -> &str {
        match self {
            Self::Schema { entry, .. } | Self::DanglingReference { entry, .. } => entry,
        }
    }

    pub fn is_dangling_reference(&self) -> bool {
        matches!(self, Self::DanglingReference { .. })
    }
}

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A draft failed admission; every violation is listed.
    #[error("{kind} '{entry}' rejected with {} violation(s)", .violations.len())]
    EntryRejected {
        kind: CatalogKind,
        entry: String,
        violations: Vec<SchemaViolation>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EntryRejected {
                kind,
                entry,
                violations,
            } => {
                let mut out = vec![format!("Fix the {kind} definition '{entry}':")];
                out.extend(violations.iter().map(|v| format!("  • {v}")));
                out
            }
        }
    }
}
