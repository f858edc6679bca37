//! HTTP API Request/Response Types
//!
//! JSON-serializable types for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::transform::{Operation, TransformResult};
use crate::types::SharedNote;

/// Body for `/api/ai/summary` and `/api/ai/grammar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    /// Text to transform (missing is treated as empty)
    #[serde(default)]
    pub text: String,
}

/// Body for `/api/ai/tags`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsRequest {
    #[serde(default)]
    pub text: String,
    /// Maximum number of tags (default: 10)
    #[serde(default)]
    pub max: Option<usize>,
}

/// Body for `/api/ai/glossary`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryRequest {
    #[serde(default)]
    pub text: String,
    /// Maximum number of terms (default: 20)
    #[serde(default)]
    pub max_terms: Option<usize>,
}

/// Response for `/api/ai/transform`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResponse {
    pub operation: Operation,
    pub result: TransformResult,
}

/// Response for a created share link
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub share_id: String,
    pub share_url: String,
    /// Same as `share_url`, kept for older clients
    pub url: String,
    pub success: bool,
}

/// Response for a shared note lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedNoteResponse {
    pub note: SharedNote,
    pub success: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether the service is healthy
    pub healthy: bool,
    /// Service version
    pub version: String,
    /// Whether a model backend is available
    pub model_configured: bool,
    /// Number of shared notes held in memory
    pub shared_notes: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
