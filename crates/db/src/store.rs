//! Database-backed [`TemplateStore`].

use async_trait::async_trait;
use grow_core::catalog::{SourceError, TemplateStore};
use grow_core::template::Template;
use sqlx::PgPool;

use crate::repositories::TemplateRepo;

/// Reads the catalog from the `workflow_templates` table.
#[derive(Clone)]
pub struct PgTemplateStore {
    pool: PgPool,
}

impl PgTemplateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateStore for PgTemplateStore {
    async fn fetch_templates(&self) -> Result<Vec<Template>, SourceError> {
        let rows = TemplateRepo::list_active(&self.pool)
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        tracing::debug!(rows = rows.len(), "Active templates read from store");
        rows.into_iter().map(|row| row.into_template()).collect()
    }
}
