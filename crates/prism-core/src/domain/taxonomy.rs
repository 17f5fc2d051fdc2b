//! Allowed category and subcategory tags per catalog.
//!
//! Tags drive sidebar grouping, so each catalog draws them from a small
//! declared set. Declaration order here is the order sections appear in
//! navigation.

use serde::{Deserialize, Serialize};

use crate::domain::{error::SchemaViolation, value_objects::CatalogKind};

/// A category tag and the subcategories allowed beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl CategoryDef {
    pub fn new<I, S>(name: impl Into<String>, subcategories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            subcategories: subcategories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, subcategory: &str) -> bool {
        self.subcategories.iter().any(|s| s == subcategory)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub components: Vec<CategoryDef>,
    pub examples: Vec<CategoryDef>,
}

impl Taxonomy {
    /// The PrismUI registry taxonomy.
    pub fn standard() -> Self {
        Self {
            components: vec![CategoryDef::new(
                "components",
                ["display", "layout", "form", "navigation", "feedback", "overlay"],
            )],
            examples: vec![CategoryDef::new("examples", ["basic", "demo"])],
        }
    }

    pub fn categories(&self, kind: CatalogKind) -> &[CategoryDef] {
        match kind {
            CatalogKind::Component => &self.components,
            CatalogKind::Example => &self.examples,
        }
    }

    pub fn category(&self, kind: CatalogKind, name: &str) -> Option<&CategoryDef> {
        self.categories(kind).iter().find(|c| c.name == name)
    }

    /// Check a category/subcategory pair, returning every violation found.
    pub fn check(
        &self,
        kind: CatalogKind,
        category: &str,
        subcategory: Option<&str>,
    ) -> Vec<SchemaViolation> {
        let Some(def) = self.category(kind, category) else {
            return vec![SchemaViolation::UnknownCategory {
                category: category.to_string(),
                allowed: self
                    .categories(kind)
                    .iter()
                    .map(|c| c.name.clone())
                    .collect(),
            }];
        };

        match subcategory {
            Some(sub) if !def.allows(sub) => vec![SchemaViolation::UnknownSubcategory {
                category: category.to_string(),
                subcategory: sub.to_string(),
            }],
            _ => Vec::new(),
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}
