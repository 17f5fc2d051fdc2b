//! Infrastructure adapters for the PrismUI registry.
//!
//! This crate implements the `CatalogSource` port from
//! `prism-core::application::ports` and owns all file access: the built-in
//! entry sources, the TOML manifest loader and the registry item export.

pub mod builtin_catalog;
pub mod catalog_store;
pub mod manifest_loader;
pub mod registry_export;

// Re-export commonly used adapters
pub use builtin_catalog::builtin_catalog;
pub use catalog_store::{ReloadReport, ReloadableCatalog, StaticCatalog};
pub use manifest_loader::ManifestLoader;
pub use registry_export::{RegistryItem, write_registry};
