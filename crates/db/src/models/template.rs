//! Workflow template rows and their conversion into catalog templates.

use grow_core::catalog::SourceError;
use grow_core::template::{Template, TemplateWorkflow};
use grow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `workflow_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateRow {
    pub id: DbId,
    pub template_key: String,
    pub name: String,
    pub description: String,
    pub tag: String,
    pub icon: Option<String>,
    pub questions: serde_json::Value,
    pub workflow: Option<serde_json::Value>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TemplateRow {
    /// Decode the JSONB columns into a [`Template`].
    ///
    /// A malformed `questions` or `workflow` document is reported rather
    /// than silently dropped.
    pub fn into_template(self) -> Result<Template, SourceError> {
        let questions: Vec<String> =
            serde_json::from_value(self.questions).map_err(|e| SourceError::Malformed {
                id: self.template_key.clone(),
                reason: format!("questions: {e}"),
            })?;

        let workflow = self
            .workflow
            .filter(|w| !w.is_null())
            .map(serde_json::from_value::<TemplateWorkflow>)
            .transpose()
            .map_err(|e| SourceError::Malformed {
                id: self.template_key.clone(),
                reason: format!("workflow: {e}"),
            })?;

        Ok(Template {
            id: self.template_key,
            name: self.name,
            description: self.description,
            tag: self.tag,
            icon: self.icon,
            questions,
            workflow,
        })
    }
}
