//! Image classification stage.

use std::sync::Arc;

use grow_core::analysis::{parse_image_analysis, ImageAnalysisResult};
use grow_core::payload::ImagePayload;
use grow_openai::types::ChatRequest;
use grow_openai::ChatModel;

use crate::error::PipelineError;
use crate::prompt::{IMAGE_ANALYSIS_PROMPT, IMAGE_SYSTEM_PROMPT};

const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.3;

/// Sends one image to a vision model and parses the structured answer.
#[derive(Clone)]
pub struct ImageClassifier {
    model: Arc<dyn ChatModel>,
    model_name: String,
}

impl ImageClassifier {
    pub fn new(model: Arc<dyn ChatModel>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    /// Classify a base64 or data-URL image payload.
    ///
    /// The payload is validated before the model is called. A response that
    /// is not the expected JSON is a hard failure: later stages depend on
    /// its fields, so there is no safe default.
    pub async fn classify(&self, payload: &str) -> Result<ImageAnalysisResult, PipelineError> {
        let image = ImagePayload::parse(payload)?;

        let request = ChatRequest::new(&self.model_name)
            .system(IMAGE_SYSTEM_PROMPT)
            .user_with_image(IMAGE_ANALYSIS_PROMPT, image.data_url())
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE);

        let raw = self.model.complete(&request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model_name, "Image classification call failed");
            e
        })?;

        parse_image_analysis(&raw).map_err(|e| {
            tracing::error!(error = %e, raw = %raw, "Failed to parse image analysis");
            PipelineError::Parse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use grow_openai::types::{ContentPart, MessageContent};
    use grow_openai::ModelError;

    use super::*;
    use crate::test_support::StubModel;

    const PNG_HEADER: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52,
    ];

    fn png_payload() -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(PNG_HEADER))
    }

    fn classifier(model: &Arc<StubModel>) -> ImageClassifier {
        ImageClassifier::new(model.clone(), "gpt-4o")
    }

    #[tokio::test]
    async fn empty_payload_fails_without_calling_model() {
        let model = Arc::new(StubModel::replying("{}"));
        let err = classifier(&model).classify("").await.unwrap_err();
        assert_matches!(err, PipelineError::InvalidInput(_));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn non_image_payload_fails_without_calling_model() {
        let model = Arc::new(StubModel::replying("{}"));
        let payload = STANDARD.encode(b"%PDF-1.7 definitely not an image");
        let err = classifier(&model).classify(&payload).await.unwrap_err();
        assert_matches!(err, PipelineError::InvalidInput(_));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn fenced_answer_is_parsed() {
        let model = Arc::new(StubModel::replying(
            "```json\n{\"description\": \"a crowded hall\", \"objects\": [\"chairs\"]}\n```",
        ));
        let result = classifier(&model).classify(&png_payload()).await.unwrap();
        assert_eq!(result.description, "a crowded hall");
        assert_eq!(result.objects, vec!["chairs"]);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn request_carries_sniffed_image() {
        let model = Arc::new(StubModel::replying("{\"description\": \"x\"}"));
        classifier(&model).classify(&png_payload()).await.unwrap();

        let request = model.last_request().unwrap();
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_tokens, Some(MAX_TOKENS));
        let MessageContent::Parts(parts) = &request.messages[1].content else {
            panic!("expected a multi-part user message");
        };
        assert_matches!(
            &parts[1],
            ContentPart::ImageUrl { image_url } if image_url.url.starts_with("data:image/png;base64,")
        );
    }

    #[tokio::test]
    async fn prose_answer_is_a_parse_error() {
        let model = Arc::new(StubModel::replying("Sorry, I can't help with that."));
        let err = classifier(&model).classify(&png_payload()).await.unwrap_err();
        assert_matches!(err, PipelineError::Parse(_));
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let model = Arc::new(StubModel::failing(503));
        let err = classifier(&model).classify(&png_payload()).await.unwrap_err();
        assert_matches!(err, PipelineError::Upstream(ModelError::Api { status: 503, .. }));
    }
}
