//! HTTP API Request Handlers
//!
//! Thin adapters from HTTP requests to the transform service and share store.

mod ai;
mod notes;
mod system;

use std::sync::Arc;

use crate::share::ShareStore;
use crate::transform::TransformService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub transform: Arc<TransformService>,
    pub shares: Arc<dyn ShareStore>,
    /// Base origin for share links; the request Host is used when unset
    pub public_url: Option<String>,
}

impl AppState {
    pub fn new(transform: TransformService, shares: Arc<dyn ShareStore>) -> Self {
        Self {
            transform: Arc::new(transform),
            shares,
            public_url: None,
        }
    }

    pub fn with_public_url(mut self, public_url: Option<String>) -> Self {
        self.public_url = public_url;
        self
    }
}

// Re-export all handlers
pub use ai::{glossary, grammar, summary, tags, transform};
pub use notes::{create_share, get_shared_note, shared_note_page};
pub use system::{health, not_found, unsupported_method};
