//! End-to-end suggestion flow: classify, load catalog, match, rank.

use grow_core::analysis::ImageAnalysisResult;
use grow_core::ranking::{rank_templates, RankedTemplate};

use crate::catalog::CatalogSource;
use crate::classifier::ImageClassifier;
use crate::error::PipelineError;
use crate::matcher::{ContentMatcher, MatchInput};

/// Result of one suggestion run.
#[derive(Debug, Clone)]
pub struct Suggestions {
    pub analysis: String,
    /// At most three templates, highest confidence first.
    pub templates: Vec<RankedTemplate>,
    /// Set when the image was classified during this run.
    pub image_analysis: Option<ImageAnalysisResult>,
}

/// Runs the pipeline stages in order for one request.
#[derive(Clone)]
pub struct TemplateSuggester {
    classifier: ImageClassifier,
    matcher: ContentMatcher,
    catalog: CatalogSource,
}

impl TemplateSuggester {
    pub fn new(classifier: ImageClassifier, matcher: ContentMatcher, catalog: CatalogSource) -> Self {
        Self {
            classifier,
            matcher,
            catalog,
        }
    }

    pub fn classifier(&self) -> &ImageClassifier {
        &self.classifier
    }

    pub fn catalog(&self) -> &CatalogSource {
        &self.catalog
    }

    /// Suggest templates for `input`.
    ///
    /// When `image_payload` is given and `input` carries no image analysis,
    /// the image is classified first. Classification always finishes before
    /// matching starts.
    pub async fn suggest(
        &self,
        mut input: MatchInput,
        image_payload: Option<&str>,
    ) -> Result<Suggestions, PipelineError> {
        let image_payload = image_payload.map(str::trim).filter(|p| !p.is_empty());
        input.validate_transcript()?;

        let mut classified = None;
        if input.image_analysis.is_none() {
            if let Some(payload) = image_payload {
                let analysis = self.classifier.classify(payload).await?;
                input.image_analysis = Some(analysis.clone());
                classified = Some(analysis);
            }
        }
        input.validate()?;

        let catalog = self.catalog.load_catalog().await?;
        let response = self.matcher.match_content(&input, &catalog).await?;
        let templates = rank_templates(&catalog, &response.confidences());

        tracing::info!(
            tier = catalog.tier().as_str(),
            suggested = response.templates.len(),
            ranked = templates.len(),
            "Templates suggested"
        );

        Ok(Suggestions {
            analysis: response.analysis_text().to_string(),
            templates,
            image_analysis: classified,
        })
    }
}
