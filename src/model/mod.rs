//! External language model access
//!
//! The rest of the crate talks to the model through [`CompletionBackend`]:
//! one prompt in, free text out. The only production backend is
//! [`GeminiBackend`]; tests substitute scripted implementations.
//!
//! # Example Configuration
//!
//! ```toml
//! [model]
//! endpoint = "https://generativelanguage.googleapis.com/v1beta"
//! model = "gemini-2.5-flash"
//! timeout_secs = 30
//! max_retries = 1
//! # api_key from GOOGLE_API_KEY env var
//! ```

mod factory;
mod gemini;
mod traits;

pub use factory::create_backend;
pub use gemini::{GeminiBackend, GeminiConfig};
pub use traits::{CompletionBackend, ModelError, ModelResult};
