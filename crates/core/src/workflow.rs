//! Workflow instantiation from a template.
//!
//! A workflow is an ephemeral checklist handed back to the client; nothing
//! here is persisted.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::template::Template;
use crate::types::Timestamp;

/// Placeholder duration shown on every step.
pub const DEFAULT_ESTIMATED_TIME: &str = "30-60 min";

/// Status assigned to a freshly started workflow.
pub const DEFAULT_STATUS: &str = "active";

/// Maximum length of a user-supplied workflow name.
pub const MAX_NAME_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub estimated_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub template_id: String,
    pub name: String,
    pub steps: Vec<WorkflowStep>,
    pub created_at: Timestamp,
    /// Free text; no transitions are enforced.
    pub status: String,
}

/// Default name: `"{template name} - {YYYY-MM-DD}"`.
pub fn default_workflow_name(template: &Template, now: Timestamp) -> String {
    format!("{} - {}", template.name, now.format("%Y-%m-%d"))
}

/// Validate a user-supplied workflow name.
pub fn validate_workflow_name(name: &str) -> Result<(), CoreError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Workflow name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Expand a template into a new workflow.
///
/// Steps map 1:1 onto the template's step strings and start incomplete. A
/// template without steps yields an empty workflow. A blank `name` falls
/// back to [`default_workflow_name`].
pub fn instantiate(template: &Template, name: Option<&str>, now: Timestamp) -> Workflow {
    let step_description = format!(
        "Complete this step to move forward with your {}",
        template.name.to_lowercase()
    );

    let steps = template
        .steps()
        .iter()
        .enumerate()
        .map(|(index, title)| WorkflowStep {
            id: format!("step-{index}"),
            title: title.clone(),
            description: step_description.clone(),
            completed: false,
            estimated_time: DEFAULT_ESTIMATED_TIME.to_string(),
        })
        .collect();

    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default_workflow_name(template, now));

    Workflow {
        id: format!("workflow-{}", now.timestamp_millis()),
        template_id: template.id.clone(),
        name,
        steps,
        created_at: now,
        status: DEFAULT_STATUS.to_string(),
    }
}

impl Workflow {
    /// Flip a step between incomplete and complete, returning the new state.
    pub fn toggle_step(&mut self, step_id: &str) -> Result<bool, CoreError> {
        let step = self
            .steps
            .iter_mut()
            .find(|s| s.id == step_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "WorkflowStep",
                id: step_id.to_string(),
            })?;
        step.completed = !step.completed;
        Ok(step.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// Percentage of completed steps; 0 for an empty workflow.
    pub fn progress_percent(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.steps.len() as f64 * 100.0
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}
