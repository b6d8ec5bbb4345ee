use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    analysis::{
        entities::{AnalysisVerdict, VerdictTier},
        ports::VisionClassifierPort,
        schema::get_vision_verdict_schema,
    },
    common::entities::app_errors::CoreError,
};

/// Instruction for the vision model. It performs its own ingredient
/// extraction and classification; the structured response schema pins
/// the output to the shared verdict shape.
const LABEL_ANALYSIS_PROMPT: &str = "Jesteś ekspertem diety Low-FODMAP. Przeanalizuj listę \
składników na tym zdjęciu etykiety produktu. Znajdź składniki wysokiego ryzyka dla osób z IBS \
(np. cebula, czosnek, syrop glukozowo-fruktozowy, pszenica, ksylitol, sorbitol, laktoza, \
inulina). Zwróć wynik wyłącznie w formacie JSON zgodnym ze schematem: status RED jeśli produkt \
zawiera silne wyzwalacze, YELLOW jeśli tylko ryzykowne, GREEN jeśli bezpieczny, UNKNOWN jeśli \
nie widać listy składników; found to lista wykrytych składników; message to krótkie \
podsumowanie po polsku; confidence to pewność odczytu od 0 do 1.";

#[derive(Debug, Clone)]
pub struct GeminiVisionClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

/// Wire shape of the vision verdict, per the response schema.
#[derive(Debug, Deserialize)]
struct VisionVerdictResponse {
    status: VerdictTier,
    found: Vec<String>,
    message: String,
    confidence: Option<f64>,
}

impl GeminiVisionClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalService(format!("vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalService(format!(
                "vision API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalService(format!("failed to parse vision response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalService("no response from vision model".to_string()))
    }
}

/// Map the model's raw JSON reply into the shared verdict shape.
/// Models occasionally wrap JSON in markdown fences despite the schema,
/// so those are stripped before parsing.
pub(crate) fn parse_vision_verdict(raw: &str) -> Result<AnalysisVerdict, CoreError> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let parsed: VisionVerdictResponse = serde_json::from_str(cleaned).map_err(|e| {
        tracing::error!("Invalid vision verdict payload: {}", e);
        CoreError::ExternalService(format!("invalid vision verdict: {}", e))
    })?;

    let score = parsed
        .confidence
        .map(|c| (c.clamp(0.0, 1.0) * 100.0).round() as u8)
        .unwrap_or(0);

    Ok(AnalysisVerdict {
        status: parsed.status,
        found: parsed.found,
        message: parsed.message,
        score,
        matches: Vec::new(),
        alternatives: None,
        warnings: None,
    })
}

impl VisionClassifierPort for GeminiVisionClient {
    async fn classify_label(&self, image_data: Vec<u8>) -> Result<AnalysisVerdict, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: LABEL_ANALYSIS_PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: get_vision_verdict_schema(),
            }),
        };

        let raw = self.call_gemini_api(request).await?;
        parse_vision_verdict(&raw)
    }
}
