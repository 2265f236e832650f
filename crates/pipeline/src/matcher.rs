//! Content matching stage.

use std::sync::Arc;

use grow_core::analysis::{parse_match_response, ImageAnalysisResult, MatchResponse};
use grow_core::catalog::{Catalog, SourceError};
use grow_openai::types::ChatRequest;
use grow_openai::ChatModel;
use serde::Deserialize;

use crate::error::PipelineError;
use crate::prompt::{match_prompt, MATCH_SYSTEM_PROMPT};

const TEMPERATURE: f32 = 0.3;

/// Maximum transcript length accepted, in characters.
pub const MAX_TRANSCRIPT_CHARS: usize = 10_000;

/// User content to match against the catalog. At least one field must be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInput {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub image_analysis: Option<ImageAnalysisResult>,
}

impl MatchInput {
    /// The transcript, trimmed, if it has any content.
    pub fn transcript(&self) -> Option<&str> {
        self.transcript
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Reject a transcript over [`MAX_TRANSCRIPT_CHARS`].
    ///
    /// Needs no model output, so callers run it before classifying an image.
    pub fn validate_transcript(&self) -> Result<(), PipelineError> {
        match self.transcript() {
            Some(t) if t.chars().count() > MAX_TRANSCRIPT_CHARS => {
                Err(PipelineError::InvalidInput(format!(
                    "Transcript exceeds maximum length of {MAX_TRANSCRIPT_CHARS} characters"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Reject input with nothing to analyze, or an overlong transcript.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.transcript().is_none() && self.image_analysis.is_none() {
            return Err(PipelineError::InvalidInput(
                "No photo or transcript data provided".to_string(),
            ));
        }
        self.validate_transcript()
    }
}

/// Asks a text model to score every catalog template against user content.
#[derive(Clone)]
pub struct ContentMatcher {
    model: Arc<dyn ChatModel>,
    model_name: String,
}

impl ContentMatcher {
    pub fn new(model: Arc<dyn ChatModel>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    /// Score the catalog against `input`.
    ///
    /// Input and catalog are checked before the model is called. An answer
    /// that cannot be parsed degrades to [`MatchResponse::fallback`] so the
    /// caller can still render without suggestions.
    pub async fn match_content(
        &self,
        input: &MatchInput,
        catalog: &Catalog,
    ) -> Result<MatchResponse, PipelineError> {
        input.validate()?;
        if catalog.is_empty() {
            return Err(PipelineError::CatalogUnavailable(SourceError::Exhausted));
        }

        let prompt = match_prompt(input.transcript(), input.image_analysis.as_ref(), catalog);
        let request = ChatRequest::new(&self.model_name)
            .system(MATCH_SYSTEM_PROMPT)
            .user(prompt)
            .temperature(TEMPERATURE);

        let raw = self.model.complete(&request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model_name, "Content matching call failed");
            e
        })?;

        match parse_match_response(&raw) {
            Ok(response) => {
                tracing::debug!(suggested = response.templates.len(), "Content matched");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(error = %e, raw = %raw, "Unparseable match response, returning no suggestions");
                Ok(MatchResponse::fallback())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use grow_core::analysis::FALLBACK_ANALYSIS;
    use grow_core::catalog::CatalogTier;
    use grow_core::template::builtin_templates;
    use grow_openai::ModelError;

    use super::*;
    use crate::test_support::StubModel;

    fn catalog() -> Catalog {
        Catalog::new(builtin_templates(), CatalogTier::Builtin)
    }

    fn transcript(text: &str) -> MatchInput {
        MatchInput {
            transcript: Some(text.to_string()),
            image_analysis: None,
        }
    }

    #[tokio::test]
    async fn empty_input_fails_without_calling_model() {
        let model = Arc::new(StubModel::replying("{}"));
        let matcher = ContentMatcher::new(model.clone(), "gpt-4");

        let err = matcher
            .match_content(&MatchInput::default(), &catalog())
            .await
            .unwrap_err();
        assert_matches!(err, PipelineError::InvalidInput(_));

        let err = matcher
            .match_content(&transcript("   "), &catalog())
            .await
            .unwrap_err();
        assert_matches!(err, PipelineError::InvalidInput(_));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn empty_catalog_is_unavailable() {
        let model = Arc::new(StubModel::replying("{}"));
        let matcher = ContentMatcher::new(model.clone(), "gpt-4");
        let empty = Catalog::new(vec![], CatalogTier::Builtin);

        let err = matcher
            .match_content(&transcript("a picnic"), &empty)
            .await
            .unwrap_err();
        assert_matches!(err, PipelineError::CatalogUnavailable(_));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn parses_suggestions() {
        let model = Arc::new(StubModel::replying(
            r#"{"analysis": "Planning a conference", "templates": [{"id": "event", "confidence": 0.92, "reasoning": "conference"}]}"#,
        ));
        let matcher = ContentMatcher::new(model.clone(), "gpt-4");

        let response = matcher
            .match_content(&transcript("planning a conference for 200 people"), &catalog())
            .await
            .unwrap();
        assert_eq!(response.analysis_text(), "Planning a conference");
        assert_eq!(response.confidences()["event"], 0.92);

        let request = model.last_request().unwrap();
        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.temperature, Some(TEMPERATURE));
    }

    #[tokio::test]
    async fn malformed_answer_degrades_to_fallback() {
        let model = Arc::new(StubModel::replying("I think you want an event!"));
        let matcher = ContentMatcher::new(model, "gpt-4");

        let response = matcher
            .match_content(&transcript("a picnic"), &catalog())
            .await
            .unwrap();
        assert!(response.templates.is_empty());
        assert_eq!(response.analysis_text(), FALLBACK_ANALYSIS);
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let model = Arc::new(StubModel::failing(429));
        let matcher = ContentMatcher::new(model, "gpt-4");

        let err = matcher
            .match_content(&transcript("a picnic"), &catalog())
            .await
            .unwrap_err();
        assert_matches!(err, PipelineError::Upstream(ModelError::Api { status: 429, .. }));
    }

    #[test]
    fn overlong_transcript_is_rejected() {
        let input = transcript(&"a".repeat(MAX_TRANSCRIPT_CHARS + 1));
        assert_matches!(input.validate(), Err(PipelineError::InvalidInput(_)));
        assert_matches!(input.validate_transcript(), Err(PipelineError::InvalidInput(_)));
    }

    #[test]
    fn transcript_check_allows_missing_transcript() {
        assert!(MatchInput::default().validate_transcript().is_ok());
        let at_limit = transcript(&"a".repeat(MAX_TRANSCRIPT_CHARS));
        assert!(at_limit.validate().is_ok());
    }
}
