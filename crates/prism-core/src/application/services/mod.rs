//! Application services - orchestrate use cases.
//!
//! `CatalogService` answers queries against the current index;
//! `DocsService` shapes those answers for a documentation site.

pub mod catalog_service;
pub mod docs_service;

pub use catalog_service::CatalogService;
pub use docs_service::{
    ComponentPage, DocsService, InstallCommand, STATIC_ROUTES, Sidebar, SidebarGroup,
    SidebarSection, SitemapEntry, component_href,
};
