//! Unified error handling for Prism Core.
//!
//! Wraps domain and application errors behind one type that carries
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::CatalogError;
use crate::domain::DomainError;

/// Root error type for Prism Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrismError {
    /// Errors from the domain layer (entry defects).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from catalog lookup and maintenance.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl PrismError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Catalog(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Integrity,
            Self::Catalog(e) => e.category(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Catalog(e) if e.is_not_found())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// An entry or the catalog as a whole is inconsistent.
    Integrity,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type PrismResult<T> = Result<T, PrismError>;
