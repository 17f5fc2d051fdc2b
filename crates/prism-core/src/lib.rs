//! Prism Core - component registry for the PrismUI docs site
//!
//! This crate provides the domain and application layers of the registry,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            prism-cli (CLI)              │
//! │   list / show / install / validate /    │
//! │   sidebar / sitemap / build / config    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (CatalogService, DocsService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Port (Trait)          │
//! │            (CatalogSource)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     prism-adapters (Infrastructure)     │
//! │  (StaticCatalog, ReloadableCatalog,     │
//! │   built-in entries, manifest loader)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Schema, Catalog, CatalogEntry)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use prism_core::{
//!     application::CatalogService,
//!     domain::CatalogKind,
//! };
//!
//! # fn source() -> Box<dyn prism_core::application::CatalogSource> { unimplemented!() }
//! let service = CatalogService::new(source());
//! let entry = service.get_by_name(CatalogKind::Component, "chat-input")?;
//! println!("{}", entry.cli().map(|c| c.npm.as_str()).unwrap_or_default());
//! # Ok::<(), prism_core::error::PrismError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{CatalogError, CatalogService, CatalogSource, DocsService};
    pub use crate::domain::{
        Catalog, CatalogEntry, CatalogKind, CliCommands, EntryDraft, IntegrityIssue,
        PackageManager, Schema, SchemaViolation, SiteConfig,
    };
    pub use crate::error::{PrismError, PrismResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
