//! Typed shapes for hosted-model responses and the parsing that produces them.
//!
//! Models are asked to answer in JSON but frequently wrap the answer in a
//! markdown code fence. [`strip_code_fences`] normalizes that away before
//! any parsing happens; everything else is validated against the structs
//! below rather than read field-by-field.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Analysis text used when the matcher's answer cannot be parsed.
pub const FALLBACK_ANALYSIS: &str = "Analyzing your content to find relevant workflows...";

/// Analysis text used when the matcher omits the `analysis` field.
pub const DEFAULT_ANALYSIS: &str = "Content analyzed successfully.";

/// Errors produced while parsing a model response.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Model response was empty")]
    Empty,

    #[error("Model response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Image analysis
// ---------------------------------------------------------------------------

/// Structured description of a single image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysisResult {
    pub description: String,
    #[serde(default)]
    pub objects: Vec<String>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ImageAnalysisResult {
    /// Render the analysis as prompt text for the content matcher.
    pub fn to_prompt_text(&self) -> String {
        let mut out = format!("Image description: {}\n", self.description);
        push_list(&mut out, "Objects", &self.objects);
        push_list(&mut out, "Visible text", &self.text);
        push_list(&mut out, "Colors", &self.colors);
        if !self.mood.is_empty() {
            out.push_str(&format!("Mood: {}\n", self.mood));
        }
        if !self.context.is_empty() {
            out.push_str(&format!("Context: {}\n", self.context));
        }
        push_list(&mut out, "Suggested activities", &self.suggestions);
        out
    }
}

fn push_list(out: &mut String, label: &str, items: &[String]) {
    if !items.is_empty() {
        out.push_str(&format!("{label}: {}\n", items.join(", ")));
    }
}

/// Parse a vision-model answer into an [`ImageAnalysisResult`].
pub fn parse_image_analysis(raw: &str) -> Result<ImageAnalysisResult, ParseError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(cleaned)?)
}

// ---------------------------------------------------------------------------
// Template matching
// ---------------------------------------------------------------------------

/// One template suggestion returned by the matcher model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSuggestion {
    #[serde(rename = "templateId", alias = "id")]
    pub template_id: String,
    pub confidence: f64,
    /// Advisory only; never surfaced to callers.
    #[serde(default)]
    pub reasoning: String,
}

/// The full matcher answer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub templates: Vec<MatchSuggestion>,
}

impl MatchResponse {
    /// The response used when the model's answer cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            analysis: Some(FALLBACK_ANALYSIS.to_string()),
            templates: Vec::new(),
        }
    }

    /// Analysis text, defaulted when the model left it out.
    pub fn analysis_text(&self) -> &str {
        self.analysis
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_ANALYSIS)
    }

    /// Map of template id to confidence.
    ///
    /// Non-finite confidences are dropped, the rest clamped to `[0, 1]`.
    /// When an id appears more than once the first entry wins.
    pub fn confidences(&self) -> HashMap<String, f64> {
        let mut map = HashMap::with_capacity(self.templates.len());
        for suggestion in &self.templates {
            if !suggestion.confidence.is_finite() {
                continue;
            }
            map.entry(suggestion.template_id.clone())
                .or_insert(suggestion.confidence.clamp(0.0, 1.0));
        }
        map
    }
}

/// Parse a matcher answer into a [`MatchResponse`].
pub fn parse_match_response(raw: &str) -> Result<MatchResponse, ParseError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(cleaned)?)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Remove a surrounding markdown code fence (```` ``` ```` or ```` ```json ````).
///
/// Text without a fence is returned trimmed and otherwise unchanged.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip the info string on the opening fence line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.strip_prefix("json").unwrap_or(rest),
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}
