//! Prompt text sent to the hosted models.

use grow_core::analysis::ImageAnalysisResult;
use grow_core::catalog::Catalog;

pub const IMAGE_SYSTEM_PROMPT: &str = "You are an AI assistant that analyzes images and extracts \
relevant information. Always respond with valid JSON.";

pub const MATCH_SYSTEM_PROMPT: &str = "You are a helpful assistant that analyzes user content and \
suggests relevant workflow templates. Always respond with valid JSON.";

pub const IMAGE_ANALYSIS_PROMPT: &str = r#"Please analyze this image and provide detailed information about:

1. **Description**: A clear, concise description of what you see in the image
2. **Objects**: List the main objects, items, or elements visible in the image
3. **Text**: Any text, signs, labels, or written content visible in the image
4. **Colors**: The dominant colors and color scheme of the image
5. **Mood**: The overall mood, atmosphere, or feeling conveyed by the image
6. **Context**: What this image might be used for or represent (e.g., business meeting, product photo, document, etc.)
7. **Suggestions**: Based on the image content, suggest potential workflow templates or business activities this might relate to

Respond in JSON format:
{
  "description": "Brief description of the image",
  "objects": ["object1", "object2", "object3"],
  "text": ["text1", "text2"],
  "colors": ["color1", "color2"],
  "mood": "mood description",
  "context": "context description",
  "suggestions": ["suggestion1", "suggestion2"]
}"#;

/// Build the matcher prompt from user content and the full catalog.
pub fn match_prompt(
    transcript: Option<&str>,
    image: Option<&ImageAnalysisResult>,
    catalog: &Catalog,
) -> String {
    let mut content = String::new();
    if let Some(transcript) = transcript {
        content.push_str(&format!("Voice input: \"{transcript}\"\n\n"));
    }
    if let Some(image) = image {
        content.push_str("Image analysis:\n");
        content.push_str(&image.to_prompt_text());
        content.push('\n');
    }

    let mut templates = String::new();
    for template in catalog.iter() {
        templates.push_str(&format!(
            "- id: \"{}\" | {} [{}]: {}\n",
            template.id, template.name, template.tag, template.description
        ));
    }

    format!(
        r#"You are an AI assistant that analyzes user content (photos and voice transcripts) to suggest relevant workflow templates.

Content to analyze:
{content}
Available workflow templates:
{templates}
Please analyze the content and:
1. Provide a brief analysis of what the user is trying to accomplish
2. Rate every template's relevance with a confidence score between 0 and 1
3. Explain why each template is relevant

Use only the template ids listed above.

Respond in JSON format:
{{
  "analysis": "Brief analysis of the content and user intent",
  "templates": [
    {{
      "id": "template-id",
      "confidence": 0.85,
      "reasoning": "Why this template is relevant"
    }}
  ]
}}"#
    )
}
