//! Repository for the `workflow_templates` table.

use grow_core::template::Template;
use sqlx::PgPool;

use crate::models::template::TemplateRow;

/// Column list for `workflow_templates` queries.
const COLUMNS: &str = "\
    id, template_key, name, description, tag, icon, questions, workflow, \
    sort_order, is_active, created_at, updated_at";

/// Provides read and seed operations for the template catalog.
pub struct TemplateRepo;

impl TemplateRepo {
    /// List active templates in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<TemplateRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workflow_templates \
             WHERE is_active \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, TemplateRow>(&query).fetch_all(pool).await
    }

    /// Find a template by its stable key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<TemplateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workflow_templates WHERE template_key = $1");
        sqlx::query_as::<_, TemplateRow>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update a template keyed on its id, at the given position.
    pub async fn upsert(
        pool: &PgPool,
        template: &Template,
        sort_order: i32,
    ) -> Result<TemplateRow, sqlx::Error> {
        let (questions, workflow) = encode_json_columns(template)?;

        let query = format!(
            "INSERT INTO workflow_templates \
                 (template_key, name, description, tag, icon, questions, workflow, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT ON CONSTRAINT uq_workflow_templates_key DO UPDATE SET \
                 name = EXCLUDED.name, \
                 description = EXCLUDED.description, \
                 tag = EXCLUDED.tag, \
                 icon = EXCLUDED.icon, \
                 questions = EXCLUDED.questions, \
                 workflow = EXCLUDED.workflow, \
                 sort_order = EXCLUDED.sort_order, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateRow>(&query)
            .bind(&template.id)
            .bind(&template.name)
            .bind(&template.description)
            .bind(&template.tag)
            .bind(template.icon.as_deref())
            .bind(questions)
            .bind(workflow)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// Insert templates missing from the table, using list position as sort
    /// order. Existing keys are left untouched. Returns the rows inserted.
    pub async fn seed(pool: &PgPool, templates: &[Template]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;
        for (index, template) in templates.iter().enumerate() {
            let (questions, workflow) = encode_json_columns(template)?;

            inserted += sqlx::query(
                "INSERT INTO workflow_templates \
                     (template_key, name, description, tag, icon, questions, workflow, sort_order) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                 ON CONFLICT ON CONSTRAINT uq_workflow_templates_key DO NOTHING",
            )
            .bind(&template.id)
            .bind(&template.name)
            .bind(&template.description)
            .bind(&template.tag)
            .bind(template.icon.as_deref())
            .bind(questions)
            .bind(workflow)
            .bind(index as i32)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;
        Ok(inserted)
    }

    /// Mark a template inactive. Returns `false` if the key is unknown.
    pub async fn deactivate(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE workflow_templates SET is_active = FALSE, updated_at = now() \
             WHERE template_key = $1",
        )
        .bind(key)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Serialize the JSONB columns of a template.
fn encode_json_columns(
    template: &Template,
) -> Result<(serde_json::Value, Option<serde_json::Value>), sqlx::Error> {
    let questions =
        serde_json::to_value(&template.questions).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    let workflow = template
        .workflow
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    Ok((questions, workflow))
}
