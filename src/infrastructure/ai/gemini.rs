use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{ExplanationError, ExplanationRequest, ExplanationService};

use super::prompt_builder::PromptBuilder;

/// Maximum error body characters included in error messages.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Connection settings for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Explanation service backed by Google's Gemini REST API.
pub struct GeminiExplainer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    timeout_secs: u64,
}

impl GeminiExplainer {
    /// Builds the HTTP client. The timeout covers connect, request and body.
    ///
    /// # Errors
    ///
    /// Returns `ExplanationError::ServiceUnavailable` if the HTTP client
    /// cannot be initialized (e.g. TLS backend failure).
    pub fn new(settings: GeminiSettings) -> Result<Self, ExplanationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| {
                ExplanationError::ServiceUnavailable(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&settings.base_url, &settings.model),
            api_key: settings.api_key,
            timeout_secs: settings.timeout_secs,
        })
    }
}

fn endpoint_url(base_url: &str, model: &str) -> String {
    let model = model.trim().trim_start_matches("models/");
    format!(
        "{}/v1beta/models/{model}:generateContent",
        base_url.trim_end_matches('/')
    )
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

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
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl ExplanationService for GeminiExplainer {
    async fn generate_explanation(
        &self,
        request: &ExplanationRequest,
    ) -> Result<String, ExplanationError> {
        let prompt = PromptBuilder::build(request);
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::debug!("Gemini request timed out after {}s", self.timeout_secs);
                    ExplanationError::Timeout
                } else {
                    ExplanationError::ServiceUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ExplanationError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let end = body
                .char_indices()
                .map(|(i, _)| i)
                .nth(MAX_ERROR_BODY_CHARS)
                .unwrap_or(body.len());
            return Err(ExplanationError::ServiceUnavailable(format!(
                "gemini returned {status}: {}",
                &body[..end]
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ExplanationError::InvalidResponse(e.to_string()))?;
        parse_response(&bytes)
    }
}

fn parse_response(body: &[u8]) -> Result<String, ExplanationError> {
    if body.is_empty() {
        return Err(ExplanationError::InvalidResponse(
            "empty response from gemini".into(),
        ));
    }

    let parsed: GenerateResponse = serde_json::from_slice(body)
        .map_err(|e| ExplanationError::InvalidResponse(format!("failed to parse response: {e}")))?;

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ExplanationError::InvalidResponse("no candidates returned".into()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    Ok(text.trim().to_string())
}
