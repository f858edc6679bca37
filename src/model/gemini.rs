//! Backend for the Google Generative Language (Gemini) REST API
//!
//! Calls `POST {endpoint}/models/{model}:generateContent` with a single
//! user prompt and joins the text parts of the first candidate.

use super::traits::{CompletionBackend, ModelError, ModelResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Delay before retrying a transient failure without a Retry-After hint
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Configuration for the Gemini backend
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL (e.g., "https://generativelanguage.googleapis.com/v1beta")
    pub endpoint: String,
    /// API key
    pub api_key: String,
    /// Model name (e.g., "gemini-2.5-flash")
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Extra attempts after a transient failure
    pub max_retries: u32,
    pub temperature: Option<f32>,
}

/// Gemini completion backend
#[derive(Debug)]
pub struct GeminiBackend {
    client: Client,
    config: GeminiConfig,
}

/// generateContent request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// generateContent response format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    total_token_count: u64,
}

/// Google API error response format
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ApiError {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GenerateResponse {
    /// Join the text parts of the first candidate
    fn into_text(self) -> ModelResult<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            Err(ModelError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

impl GeminiBackend {
    /// Create a new Gemini backend
    pub fn new(config: GeminiConfig) -> ModelResult<Self> {
        info!(
            "Initializing Gemini backend: endpoint={}, model={}",
            config.endpoint, config.model
        );

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| ModelError::Config(format!("Invalid API key format: {}", e)))?;
        key.set_sensitive(true);
        headers.insert("x-goog-api-key", key);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ModelError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Make one generateContent request
    async fn request_completion(&self, prompt: &str) -> ModelResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: self
                .config
                .temperature
                .map(|temperature| GenerationConfig { temperature }),
        };

        debug!(
            "Sending completion request to {} ({} prompt bytes)",
            self.config.model,
            prompt.len()
        );

        let response = self.client.post(self.generate_url()).json(&request).send().await?;
        let status = response.status();

        // Handle rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs.saturating_mul(1000));

            return Err(ModelError::RateLimited {
                retry_after_ms: retry_after,
            });
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);

            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        if let Some(usage) = &body.usage_metadata {
            debug!("Completion used {} tokens", usage.total_token_count);
        }
        body.into_text()
    }

    /// How long to wait before retrying `err`: the server's Retry-After hint
    /// when given, capped at the request timeout, else the fixed backoff
    fn retry_delay(&self, err: &ModelError) -> Duration {
        match err {
            ModelError::RateLimited {
                retry_after_ms: Some(ms),
            } => Duration::from_millis(*ms).min(Duration::from_secs(self.config.timeout_secs)),
            _ => RETRY_BACKOFF,
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> ModelResult<String> {
        let mut attempt = 0;
        loop {
            match self.request_completion(prompt).await {
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.retry_delay(&e);
                    warn!(
                        "Transient model failure (attempt {}), retrying in {}ms: {}",
                        attempt,
                        delay.as_millis(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
