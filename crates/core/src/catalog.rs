//! The template catalog and the seam for reading it from a backing store.

use async_trait::async_trait;

use crate::template::Template;

/// Errors produced while reading templates from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backing store could not be reached or queried.
    #[error("Template store unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be turned into a [`Template`].
    #[error("Malformed template '{id}': {reason}")]
    Malformed { id: String, reason: String },

    /// Every source was tried and none produced a usable catalog.
    #[error("No template source produced a catalog")]
    Exhausted,
}

/// A backing store that can enumerate templates.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Read every template, in display order.
    async fn fetch_templates(&self) -> Result<Vec<Template>, SourceError>;
}

/// Which tier a catalog was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTier {
    Store,
    Builtin,
}

impl CatalogTier {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogTier::Store => "store",
            CatalogTier::Builtin => "builtin",
        }
    }
}

/// An ordered, read-only set of templates keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<Template>,
    tier: CatalogTier,
}

impl Catalog {
    /// Build a catalog, dropping later duplicates of an id.
    pub fn new(templates: Vec<Template>, tier: CatalogTier) -> Self {
        let mut seen = std::collections::HashSet::new();
        let templates = templates
            .into_iter()
            .filter(|t| seen.insert(t.id.clone()))
            .collect();
        Self { templates, tier }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn tier(&self) -> CatalogTier {
        self.tier
    }
}
