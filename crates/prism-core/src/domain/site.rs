//! Site-wide settings consumed by the docs generator.
//!
//! `SiteConfig` is an ordinary value: callers build it (or deserialize it
//! from their own config file) and hand it to `DocsService`. Nothing here is
//! global.

use serde::{Deserialize, Serialize};

/// A header navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// One item of a sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
}

impl NavItem {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            is_new: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteLinks {
    pub email: String,
    pub twitter: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    /// Absolute origin, without a trailing slash.
    pub url: String,
    pub keywords: Vec<String>,
    pub links: SiteLinks,
    pub header: Vec<NavLink>,
    /// Items of the "Getting Started" sidebar section.
    pub getting_started: Vec<NavItem>,
    /// Components flagged as new in the sidebar.
    pub new_components: Vec<String>,
}

impl SiteConfig {
    /// `url` joined with an absolute route.
    pub fn absolute(&self, route: &str) -> String {
        let base = self.url.trim_end_matches('/');
        match route {
            "" | "/" => base.to_string(),
            r if r.starts_with('/') => format!("{base}{r}"),
            r => format!("{base}/{r}"),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "PrismUI".into(),
            description: "AI Components with Shadcn UI".into(),
            url: "https://www.prismui.tech".into(),
            keywords: ["Shadcn UI", "AI", "Next.js", "React", "Tailwind CSS"]
                .into_iter()
                .map(Into::into)
                .collect(),
            links: SiteLinks {
                email: "franciscoemoretti@gmail.com".into(),
                twitter: "https://twitter.com/franmoretti_".into(),
                github: "https://github.com/FranciscoMoretti/shadcn-ai".into(),
            },
            header: vec![
                NavLink::new("/docs", "Docs"),
                NavLink::new("/docs/components/expandable-card", "Components"),
            ],
            getting_started: vec![
                NavItem::new("Introduction", "/docs"),
                NavItem::new("Installation", "/docs/installation"),
            ],
            new_components: vec!["chat-input".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_joins_without_double_slash() {
        let site = SiteConfig::default().with_url("https://example.test/");
        assert_eq!(site.absolute("/"), "https://example.test");
        assert_eq!(site.absolute("/docs"), "https://example.test/docs");
        assert_eq!(site.absolute("help"), "https://example.test/help");
    }
}
