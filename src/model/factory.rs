//! Backend factory for creating completion backends from configuration

use super::gemini::{GeminiBackend, GeminiConfig};
use super::traits::{CompletionBackend, ModelResult};
use crate::config::{ModelConfig, API_KEY_ENV};
use std::sync::Arc;
use tracing::{info, warn};

/// Create a completion backend from configuration
///
/// Returns `Ok(None)` when no API key is available; the transform service
/// then reports itself as not configured instead of failing at startup.
pub fn create_backend(config: &ModelConfig) -> ModelResult<Option<Arc<dyn CompletionBackend>>> {
    let Some(api_key) = config.resolve_api_key() else {
        warn!(
            "No model API key configured (set [model] api_key or {}); AI endpoints will answer 501",
            API_KEY_ENV
        );
        return Ok(None);
    };

    info!("Creating Gemini backend: model={}", config.model);

    let backend = GeminiBackend::new(GeminiConfig {
        endpoint: config.endpoint.clone(),
        api_key,
        model: config.model.clone(),
        timeout_secs: config.timeout_secs,
        max_retries: config.max_retries,
        temperature: config.temperature,
    })?;
    Ok(Some(Arc::new(backend)))
}
