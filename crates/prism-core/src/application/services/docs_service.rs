//! Docs Service - the data a documentation site renders.
//!
//! Produces the sidebar tree, sitemap entries and per-component page data
//! from the catalog and an explicit [`SiteConfig`]. Rendering is left to the
//! site.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{CatalogError, services::catalog_service::{CatalogService, examples_in}},
    domain::{CatalogEntry, CatalogKind, NavItem, PackageManager, SiteConfig, humanize},
    error::PrismResult,
};

/// Routes every site has regardless of catalog content.
pub const STATIC_ROUTES: [&str; 3] = ["/", "/help", "/docs"];

/// Docs route for a component slug.
pub fn component_href(slug: &str) -> String {
    format!("/docs/components/{slug}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Subcategory title; `None` for entries without one.
    pub label: Option<String>,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    pub title: String,
    pub groups: Vec<SidebarGroup>,
}

impl SidebarSection {
    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub sections: Vec<SidebarSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
}

/// One install command, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallCommand {
    pub manager: PackageManager,
    pub command: String,
}

/// Everything a component's docs page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentPage {
    pub title: String,
    pub href: String,
    pub component: CatalogEntry,
    pub examples: Vec<CatalogEntry>,
    pub install: Vec<InstallCommand>,
}

/// Builds navigation and page data for the docs site.
pub struct DocsService {
    catalog: CatalogService,
    site: SiteConfig,
}

impl DocsService {
    pub fn new(catalog: CatalogService, site: SiteConfig) -> Self {
        Self { catalog, site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// "Getting Started" followed by one section per component category.
    ///
    /// Within a section, entries are grouped by subcategory in order of first
    /// appearance; entries keep declaration order inside a group. A name
    /// declared twice is listed once, at its first declaration.
    #[instrument(skip(self))]
    pub fn sidebar(&self) -> PrismResult<Sidebar> {
        let snapshot = self.catalog.snapshot()?;
        let mut sections = vec![SidebarSection {
            title: "Getting Started".into(),
            groups: vec![SidebarGroup {
                label: None,
                items: self.site.getting_started.clone(),
            }],
        }];

        let mut categories: Vec<&str> = Vec::new();
        for entry in snapshot.entries(CatalogKind::Component) {
            if !categories.contains(&entry.category()) {
                categories.push(entry.category());
            }
        }

        for category in categories {
            let mut groups: Vec<SidebarGroup> = Vec::new();
            let first_declarations = snapshot
                .by_category(CatalogKind::Component, category)
                .filter(|entry| {
                    snapshot
                        .get(CatalogKind::Component, entry.name().as_str())
                        .is_some_and(|first| std::ptr::eq(first, *entry))
                });
            for entry in first_declarations {
                let label = entry.subcategory().map(humanize);
                let item = self.nav_item(entry);
                match groups.iter_mut().find(|g| g.label == label) {
                    Some(group) => group.items.push(item),
                    None => groups.push(SidebarGroup {
                        label,
                        items: vec![item],
                    }),
                }
            }
            sections.push(SidebarSection {
                title: humanize(category),
                groups,
            });
        }

        debug!(sections = sections.len(), "sidebar built");
        Ok(Sidebar { sections })
    }

    fn nav_item(&self, entry: &CatalogEntry) -> NavItem {
        let name = entry.name();
        NavItem {
            title: name.title(),
            href: component_href(name.slug()),
            is_new: self.site.new_components.iter().any(|n| n == name.as_str()),
        }
    }

    /// Static routes, getting-started pages and one entry per component.
    ///
    /// Entries without a last-modified timestamp use `now`.
    #[instrument(skip(self))]
    pub fn sitemap(&self, now: DateTime<Utc>) -> PrismResult<Vec<SitemapEntry>> {
        let snapshot = self.catalog.snapshot()?;
        let mut entries: Vec<SitemapEntry> = Vec::new();
        let mut push = |url: String, last_modified: DateTime<Utc>| {
            if !entries.iter().any(|e| e.url == url) {
                entries.push(SitemapEntry { url, last_modified });
            }
        };

        for route in STATIC_ROUTES {
            push(self.site.absolute(route), now);
        }
        for item in &self.site.getting_started {
            push(self.site.absolute(&item.href), now);
        }
        for entry in snapshot.entries(CatalogKind::Component) {
            let url = self.site.absolute(&component_href(entry.name().slug()));
            push(url, entry.meta().last_modified.unwrap_or(now));
        }

        Ok(entries)
    }

    /// Page data for one component.
    ///
    /// # Errors
    ///
    /// `CatalogError::NotFound` if no such component exists.
    #[instrument(skip(self))]
    pub fn page(&self, name: &str) -> PrismResult<ComponentPage> {
        let snapshot = self.catalog.snapshot()?;
        let component = snapshot
            .get(CatalogKind::Component, name)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(CatalogKind::Component, name))?;
        let examples = examples_in(&snapshot, name)?;
        let install = component
            .cli()
            .map(|cli| {
                cli.iter()
                    .map(|(manager, command)| InstallCommand {
                        manager,
                        command: command.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(ComponentPage {
            title: component.name().title(),
            href: component_href(component.name().slug()),
            component,
            examples,
            install,
        })
    }
}
