//! Core types for NoteCraft

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title used when a shared note arrives without one
pub const DEFAULT_NOTE_TITLE: &str = "Untitled Note";

/// Opaque share token
pub type ShareId = String;

/// A note as submitted for sharing, before it has been assigned an id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    /// Caller-side note reference, stored as-is
    #[serde(default)]
    pub note_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NoteDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_note_id(mut self, note_id: impl Into<String>) -> Self {
        self.note_id = Some(note_id.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Title to store, falling back to [`DEFAULT_NOTE_TITLE`] when absent or blank
    pub fn resolved_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => DEFAULT_NOTE_TITLE.to_string(),
        }
    }
}

/// An immutable snapshot of a note, retrievable by its share id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedNote {
    pub share_id: ShareId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub shared_at: DateTime<Utc>,
}

impl SharedNote {
    /// Build a snapshot from a draft, stamped with the current time
    pub fn from_draft(share_id: ShareId, draft: NoteDraft) -> Self {
        let title = draft.resolved_title();
        Self {
            share_id,
            note_id: draft.note_id,
            title,
            content: draft.content,
            tags: draft.tags,
            shared_at: Utc::now(),
        }
    }
}

/// A single glossary entry extracted from model output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

impl GlossaryTerm {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}
