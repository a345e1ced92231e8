use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use log::debug;
use serde::{Deserialize, Serialize};

use super::workflow::{BackdropService, ImageRequest, ServiceError, TextRequest};
use crate::config;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug, PartialEq)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug, PartialEq)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    thinking_config: ThinkingConfig,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        (!text.trim().is_empty()).then(|| text)
    }
}

#[derive(Serialize, Debug, PartialEq)]
struct PredictBody<'a> {
    instances: Vec<Instance<'a>>,
    parameters: ImageParameters,
}

#[derive(Serialize, Debug, PartialEq)]
struct Instance<'a> {
    prompt: &'a str,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ImageParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
    output_options: OutputOptions,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: &'static str,
}

#[derive(Deserialize, Debug, Default)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

impl PredictResponse {
    fn images(self) -> Vec<String> {
        self.predictions
            .into_iter()
            .filter_map(|p| p.bytes_base64_encoded)
            .filter(|bytes| !bytes.is_empty())
            .collect()
    }
}

fn text_body(request: &TextRequest) -> GenerateContentBody<'_> {
    GenerateContentBody {
        contents: vec![Content {
            parts: vec![Part { text: &request.prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
            thinking_config: ThinkingConfig {
                thinking_budget: request.thinking_budget,
            },
        },
    }
}

fn image_body(request: &ImageRequest) -> PredictBody<'_> {
    PredictBody {
        instances: vec![Instance { prompt: &request.prompt }],
        parameters: ImageParameters {
            sample_count: request.count,
            aspect_ratio: request.aspect_ratio,
            output_options: OutputOptions {
                mime_type: request.mime_type,
            },
        },
    }
}

/// Client for the hosted Gemini / Imagen REST endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiClient {
    base_url: &'static str,
    api_key: &'static str,
}

impl GeminiClient {
    pub fn from_config() -> Result<Self, ServiceError> {
        Ok(Self {
            base_url: config::get_api_base_url(),
            api_key: config::get_api_key()?,
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn post<T: Serialize>(&self, url: &str, body: &T) -> Result<Response, ServiceError> {
        debug!("POST {}", url);
        let response = Request::post(url)
            .header("x-goog-api-key", self.api_key)
            .json(body)?
            .send()
            .await?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status { status, body });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl BackdropService for GeminiClient {
    async fn generate_text(&self, request: &TextRequest) -> Result<String, ServiceError> {
        let url = self.endpoint(request.model, "generateContent");
        let response = self.post(&url, &text_body(request)).await?;
        response
            .json::<GenerateContentResponse>()
            .await?
            .text()
            .ok_or(ServiceError::EmptyText)
    }

    async fn generate_images(&self, request: &ImageRequest) -> Result<Vec<String>, ServiceError> {
        let url = self.endpoint(request.model, "predict");
        let response = self.post(&url, &image_body(request)).await?;
        Ok(response.json::<PredictResponse>().await?.images())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::backdrop::workflow::{idea_request, image_request, BackdropIdea};

    #[test]
    fn test_text_body_shape() {
        let request = idea_request("gala");
        let body = serde_json::to_value(text_body(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": request.prompt }] }],
                "generationConfig": {
                    "temperature": 0.8f32,
                    "maxOutputTokens": 200,
                    "thinkingConfig": { "thinkingBudget": 100 }
                }
            })
        );
    }

    #[test]
    fn test_image_body_shape() {
        let request = image_request(&BackdropIdea("neon grid".to_string()));
        let body = serde_json::to_value(image_body(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "instances": [{
                    "prompt": "A high-resolution, cinematic photograph of a photobooth backdrop. neon grid"
                }],
                "parameters": {
                    "sampleCount": 1,
                    "aspectRatio": "4:3",
                    "outputOptions": { "mimeType": "image/jpeg" }
                }
            })
        );
    }

    #[test]
    fn test_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Velvet drapes " }, { "text": "and gold arches." }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Velvet drapes and gold arches."));
    }

    #[test]
    fn test_text_keeps_whitespace() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "\n Paper lanterns over a koi pond. " }] } }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("\n Paper lanterns over a koi pond. "));
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": " \n " }] } }]
        }))
        .unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_blocked_prompt_has_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_predictions_without_bytes_are_dropped() {
        let response: PredictResponse = serde_json::from_value(json!({
            "predictions": [
                { "raiFilteredReason": "filtered" },
                { "bytesBase64Encoded": "/9j/4AAQ", "mimeType": "image/jpeg" }
            ]
        }))
        .unwrap();
        assert_eq!(response.images(), vec!["/9j/4AAQ".to_string()]);

        let empty: PredictResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.images().is_empty());
    }

    #[test]
    fn test_endpoint_format() {
        let client = GeminiClient {
            base_url: "https://example.test",
            api_key: "k",
        };
        assert_eq!(
            client.endpoint("imagen-4.0-generate-001", "predict"),
            "https://example.test/v1beta/models/imagen-4.0-generate-001:predict"
        );
    }
}
