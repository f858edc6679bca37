//! External language model configuration

use serde::{Deserialize, Serialize};

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Default timeout for model requests
fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

/// Generative model configuration
///
/// ```toml
/// [model]
/// endpoint = "https://generativelanguage.googleapis.com/v1beta"
/// model = "gemini-2.5-flash"
/// # api_key from GOOGLE_API_KEY env var
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// API base URL; `/models/{model}:generateContent` is appended
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// API key (optional, can also use GOOGLE_API_KEY env var)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Extra attempts after a transient failure (timeout, 429, 5xx)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Sampling temperature passed through to the model
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            temperature: None,
        }
    }
}

impl ModelConfig {
    /// The configured key, or the one from the environment. Blank keys count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
