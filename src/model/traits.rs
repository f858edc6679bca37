//! Completion backend trait definitions
//!
//! Defines the core trait that all language model backends must implement.

use async_trait::async_trait;
use std::fmt::Debug;

/// Errors that can occur while calling the external model
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Rate limited by the API
    #[error("Rate limited, retry after {retry_after_ms:?}ms")]
    RateLimited {
        /// Suggested retry delay in milliseconds, if provided by the API
        retry_after_ms: Option<u64>,
    },

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered successfully but produced no text
    #[error("Model returned no text")]
    EmptyResponse,

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ModelError {
    /// Whether a second attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Network(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::EmptyResponse | Self::Config(_) => false,
        }
    }
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Core trait for text-completion backends
///
/// A backend takes one free-text prompt and returns free text. The trait is
/// object-safe for use as `Arc<dyn CompletionBackend>`.
#[async_trait]
pub trait CompletionBackend: Send + Sync + Debug {
    /// Run a single completion
    async fn complete(&self, prompt: &str) -> ModelResult<String>;

    /// Get the backend name (e.g., "gemini")
    fn name(&self) -> &str;
}
