//! Text-transform service
//!
//! All four operations share one path: validate, build the operation's
//! prompt, make a single completion call, normalize the output.

mod normalize;
mod operation;
mod prompt;

pub use normalize::{clean_grammar, parse_glossary, parse_tags};
pub use operation::{Operation, TransformRequest, TransformResult};
pub use prompt::build_prompt;

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

use crate::config::TransformConfig;
use crate::model::{CompletionBackend, ModelError};

/// Errors surfaced by [`TransformService::transform`]
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Bad or missing input
    #[error("{0}")]
    Validation(String),

    /// No model backend is configured
    #[error("AI service not configured")]
    NotConfigured,

    /// The model call failed
    #[error("{operation} failed: {source}")]
    Upstream {
        operation: Operation,
        #[source]
        source: ModelError,
    },
}

impl TransformError {
    /// Short message safe to show to callers; never includes the upstream cause
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::NotConfigured => "AI service not configured".to_string(),
            Self::Upstream { operation, .. } => operation.failure_message().to_string(),
        }
    }
}

pub type TransformOutcome = Result<TransformResult, TransformError>;

/// Runs transform operations against an optional completion backend
#[derive(Debug, Clone)]
pub struct TransformService {
    backend: Option<Arc<dyn CompletionBackend>>,
    config: TransformConfig,
}

impl TransformService {
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>, config: TransformConfig) -> Self {
        Self { backend, config }
    }

    /// Whether a model backend is available
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Resolve the item cap for a request, applying per-operation defaults
    fn max_items(&self, request: &TransformRequest) -> Result<usize, TransformError> {
        if !request.operation.takes_max_items() {
            return Ok(0);
        }
        let default = match request.operation {
            Operation::Glossary => self.config.default_max_terms,
            _ => self.config.default_max_tags,
        };
        match request.max_items {
            None => Ok(default),
            Some(n) if n >= 1 && n <= self.config.max_items_limit => Ok(n),
            Some(n) => Err(TransformError::Validation(format!(
                "maxItems must be between 1 and {}, got {}",
                self.config.max_items_limit, n
            ))),
        }
    }

    /// Run one transform
    pub async fn transform(&self, request: TransformRequest) -> TransformOutcome {
        if request.text.trim().is_empty() {
            return Err(TransformError::Validation("Text is required".to_string()));
        }
        let max_items = self.max_items(&request)?;
        let backend = self.backend.as_ref().ok_or(TransformError::NotConfigured)?;

        let operation = request.operation;
        let prompt = build_prompt(operation, &request.text, max_items);

        let start = Instant::now();
        let raw = backend.complete(&prompt).await.map_err(|source| {
            error!("{} request to {} failed: {}", operation, backend.name(), source);
            TransformError::Upstream { operation, source }
        })?;
        debug!(
            "{} completed in {}ms ({} bytes of model output)",
            operation,
            start.elapsed().as_millis(),
            raw.len()
        );

        Ok(match operation {
            Operation::Summary => TransformResult::Summary { summary: raw },
            Operation::Tags => TransformResult::Tags {
                tags: parse_tags(&raw, max_items),
            },
            Operation::Grammar => TransformResult::Grammar {
                corrected: clean_grammar(&raw, &request.text),
            },
            Operation::Glossary => TransformResult::Glossary {
                terms: parse_glossary(&raw, max_items),
            },
        })
    }
}
