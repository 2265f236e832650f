//! Two-tier template catalog source.
//!
//! The backing store is tried first. When it fails, or holds no active
//! templates, the built-in list is used instead. The tier actually used is
//! logged on every load.

use std::sync::Arc;

use grow_core::catalog::{Catalog, CatalogTier, SourceError, TemplateStore};
use grow_core::template::{builtin_templates, Template};

/// Loads the catalog from a store with a static fallback.
#[derive(Clone)]
pub struct CatalogSource {
    store: Option<Arc<dyn TemplateStore>>,
    fallback: Vec<Template>,
}

impl CatalogSource {
    /// Store first, built-in templates as fallback.
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self {
            store: Some(store),
            fallback: builtin_templates(),
        }
    }

    /// Built-in templates only.
    pub fn builtin() -> Self {
        Self {
            store: None,
            fallback: builtin_templates(),
        }
    }

    /// Replace the fallback list.
    pub fn with_fallback(mut self, fallback: Vec<Template>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Load the catalog, trying the store before the fallback.
    pub async fn load_catalog(&self) -> Result<Catalog, SourceError> {
        if let Some(store) = &self.store {
            match store.fetch_templates().await {
                Ok(templates) if !templates.is_empty() => {
                    let catalog = Catalog::new(templates, CatalogTier::Store);
                    tracing::debug!(
                        tier = catalog.tier().as_str(),
                        count = catalog.len(),
                        "Template catalog loaded"
                    );
                    return Ok(catalog);
                }
                Ok(_) => {
                    tracing::warn!("Template store is empty, falling back to built-in catalog");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Template store failed, falling back to built-in catalog");
                }
            }
        }

        if self.fallback.is_empty() {
            tracing::error!("No template source produced a catalog");
            return Err(SourceError::Exhausted);
        }

        let catalog = Catalog::new(self.fallback.clone(), CatalogTier::Builtin);
        tracing::debug!(
            tier = catalog.tier().as_str(),
            count = catalog.len(),
            "Template catalog loaded"
        );
        Ok(catalog)
    }
}
