//! Google Gemini adapter for quote generation.
//!
//! Implements `CompletionPort` against the `generateContent` REST endpoint.
//! The key travels in the `x-goog-api-key` header so it never appears in a URL.

use crate::adapters::http::transport_failure;
use crate::domain::{BackendFailure, CompletionRequest};
use crate::ports::CompletionPort;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gemini REST adapter.
pub struct GeminiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `client` - Shared reqwest client (timeouts configured by the caller)
    /// * `api_url` - API base, e.g. "https://generativelanguage.googleapis.com/v1beta"
    /// * `api_key` - Google AI Studio key; empty means "not configured"
    pub fn new(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            model
        )
    }
}

/// generateContent request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// generateContent response body. Only the text parts are read.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn first_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        Some(text)
    }
}

#[async_trait::async_trait]
impl CompletionPort for GeminiAdapter {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendFailure> {
        if self.api_key.trim().is_empty() {
            return Err(BackendFailure::from_text("api_key is not set"));
        }

        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BackendFailure::http(status.as_u16(), text));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendFailure::from_text(format!("invalid response body: {}", e.without_url())))?;

        let text = parsed
            .first_text()
            .ok_or_else(|| BackendFailure::from_text("response contained no candidates"))?;

        debug!(model = %request.model, text_len = text.len(), "received completion");
        Ok(text)
    }
}
