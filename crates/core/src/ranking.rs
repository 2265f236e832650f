//! Joining matcher confidences back to the catalog.
//!
//! Ranking iterates the catalog, never the model's output, so a template id
//! invented by the model can never reach a caller.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::template::Template;

/// Suggestions at or below this confidence are discarded.
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Maximum number of ranked templates returned.
pub const MAX_RANKED: usize = 3;

/// A catalog template paired with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTemplate {
    #[serde(flatten)]
    pub template: Template,
    pub confidence: f64,
}

/// Rank catalog templates by the confidences suggested for them.
///
/// Templates without a suggestion score 0. The sort is stable, so ties keep
/// catalog order. An empty result is a normal outcome.
pub fn rank_templates(catalog: &Catalog, confidences: &HashMap<String, f64>) -> Vec<RankedTemplate> {
    let mut ranked: Vec<RankedTemplate> = catalog
        .iter()
        .filter_map(|template| {
            let confidence = confidences.get(&template.id).copied().unwrap_or(0.0);
            (confidence > MIN_CONFIDENCE).then(|| RankedTemplate {
                template: template.clone(),
                confidence,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    ranked.truncate(MAX_RANKED);
    ranked
}
