//! Transform operations, requests and results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::GlossaryTerm;

/// The four supported text transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Summary,
    Tags,
    Grammar,
    Glossary,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Summary, Self::Tags, Self::Grammar, Self::Glossary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Tags => "tags",
            Self::Grammar => "grammar",
            Self::Glossary => "glossary",
        }
    }

    /// Whether the prompt takes an item count
    pub fn takes_max_items(&self) -> bool {
        matches!(self, Self::Tags | Self::Glossary)
    }

    /// Message shown to callers when the model call fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Summary => "Failed to generate summary",
            Self::Tags => "Failed to generate tags",
            Self::Grammar => "Failed to check grammar",
            Self::Glossary => "Failed to generate glossary",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "tags" => Ok(Self::Tags),
            "grammar" => Ok(Self::Grammar),
            "glossary" => Ok(Self::Glossary),
            other => Err(format!(
                "unknown operation '{}' (expected summary, tags, grammar or glossary)",
                other
            )),
        }
    }
}

/// A request to transform a piece of text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    /// Text to transform; must not be blank
    #[serde(default)]
    pub text: String,
    pub operation: Operation,
    /// Item cap for tags and glossary (defaults: 10 tags, 20 terms)
    #[serde(default)]
    pub max_items: Option<usize>,
}

impl TransformRequest {
    pub fn new(operation: Operation, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            operation,
            max_items: None,
        }
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

/// Normalized model output, one shape per operation
///
/// Serializes as the bare result object (`{"summary": ...}`, `{"tags": [...]}`,
/// `{"corrected": ...}` or `{"terms": [...]}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransformResult {
    Summary { summary: String },
    Tags { tags: Vec<String> },
    Grammar { corrected: String },
    Glossary { terms: Vec<GlossaryTerm> },
}

impl TransformResult {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Summary { .. } => Operation::Summary,
            Self::Tags { .. } => Operation::Tags,
            Self::Grammar { .. } => Operation::Grammar,
            Self::Glossary { .. } => Operation::Glossary,
        }
    }
}
