//! Handlers for image classification and template suggestion.
//!
//! Both endpoints answer with a flat `{ "success": true, ... }` body.
//! Failures go through [`AppError`], so callers always see the same error
//! shape.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use grow_core::analysis::ImageAnalysisResult;
use grow_core::ranking::RankedTemplate;
use grow_pipeline::MatchInput;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /analyze-image`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    #[serde(default)]
    pub image_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeImageResponse {
    pub success: bool,
    pub analysis: ImageAnalysisResult,
}

/// Request body for `POST /analyze-content`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeContentRequest {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub image_analysis: Option<ImageAnalysisResult>,
    /// Raw image, classified first when `image_analysis` is absent.
    #[serde(default)]
    pub image_data: Option<String>,
}

/// A ranked template as shown on a suggestion card.
#[derive(Debug, Serialize)]
pub struct SuggestedTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub category: String,
    pub steps: Vec<String>,
    pub confidence: f64,
}

impl From<RankedTemplate> for SuggestedTemplate {
    fn from(ranked: RankedTemplate) -> Self {
        let category = ranked.template.category().to_string();
        let steps = ranked.template.steps().to_vec();
        let template = ranked.template;
        Self {
            id: template.id,
            name: template.name,
            description: template.description,
            tag: template.tag,
            icon: template.icon,
            category,
            steps,
            confidence: ranked.confidence,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeContentResponse {
    pub success: bool,
    pub analysis: String,
    pub templates: Vec<SuggestedTemplate>,
    /// Present when the image was classified as part of this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<ImageAnalysisResult>,
}

/// POST /api/v1/analyze-image
///
/// Classify one image with the vision model.
pub async fn analyze_image(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeImageRequest>,
) -> AppResult<impl IntoResponse> {
    let payload = input
        .image_data
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("No image data provided".to_string()))?;

    let analysis = state.suggester.classifier().classify(payload).await?;

    tracing::info!(
        objects = analysis.objects.len(),
        suggestions = analysis.suggestions.len(),
        "Image analyzed"
    );

    Ok(Json(AnalyzeImageResponse {
        success: true,
        analysis,
    }))
}

/// POST /api/v1/analyze-content
///
/// Suggest up to three templates for a transcript and/or image.
pub async fn analyze_content(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeContentRequest>,
) -> AppResult<impl IntoResponse> {
    let match_input = MatchInput {
        transcript: input.transcript,
        image_analysis: input.image_analysis,
    };

    let suggestions = state
        .suggester
        .suggest(match_input, input.image_data.as_deref())
        .await?;

    tracing::info!(
        templates = suggestions.templates.len(),
        classified_image = suggestions.image_analysis.is_some(),
        "Content analyzed"
    );

    Ok(Json(AnalyzeContentResponse {
        success: true,
        analysis: suggestions.analysis,
        templates: suggestions
            .templates
            .into_iter()
            .map(SuggestedTemplate::from)
            .collect(),
        image_analysis: suggestions.image_analysis,
    }))
}
