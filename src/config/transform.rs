//! Text-transform defaults

use serde::{Deserialize, Serialize};

/// Limits and defaults for transform requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Tags requested when the caller does not say
    #[serde(default = "default_max_tags")]
    pub default_max_tags: usize,
    /// Glossary terms requested when the caller does not say
    #[serde(default = "default_max_terms")]
    pub default_max_terms: usize,
    /// Upper bound on any requested item count
    #[serde(default = "default_max_items_limit")]
    pub max_items_limit: usize,
}

fn default_max_tags() -> usize {
    10
}

fn default_max_terms() -> usize {
    20
}

fn default_max_items_limit() -> usize {
    100
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            default_max_tags: default_max_tags(),
            default_max_terms: default_max_terms(),
            max_items_limit: default_max_items_limit(),
        }
    }
}
