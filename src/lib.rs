//! NoteCraft: AI Text Transforms and Note Sharing
//!
//! Two independent services behind one HTTP API:
//! - A text-transform service (summary, tags, grammar, glossary) that wraps
//!   a generative language model with fixed prompts and output normalization
//! - An in-memory share store that snapshots notes under short opaque ids

pub mod api;
pub mod config;
pub mod model;
pub mod share;
pub mod transform;
pub mod types;

pub use config::Config;
pub use types::*;
