//! Application layer for the PrismUI registry.
//!
//! This layer contains:
//! - **Services**: query use cases (CatalogService, DocsService)
//! - **Ports**: the `CatalogSource` trait adapters implement
//! - **Errors**: lookup and index-maintenance errors
//!
//! Entry rules live in `crate::domain`; this layer only takes snapshots and
//! shapes results.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CatalogService, ComponentPage, DocsService, InstallCommand, Sidebar, SidebarGroup,
    SidebarSection, SitemapEntry,
};

pub use ports::CatalogSource;

pub use error::CatalogError;
