//! Ephemeral note sharing
//!
//! Notes are snapshotted under a short opaque id and served back by that id
//! until the process exits.

mod page;
mod store;

pub use page::{render_not_found_page, render_note_page};
pub use store::{generate_share_id, InMemoryShareStore, ShareStore, SHARE_ID_LEN};

use crate::types::NoteDraft;

/// Errors from share store operations
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// The draft cannot be shared
    #[error("{0}")]
    Validation(String),

    /// No note is stored under this id
    #[error("Shared note not found: {0}")]
    NotFound(String),

    /// Every id drawn for this create was already taken
    #[error("Could not allocate a unique share id")]
    IdCollision,
}

/// Result type for share operations
pub type ShareResult<T> = Result<T, ShareError>;

/// Drafts must carry non-blank content
pub(crate) fn validate_draft(draft: &NoteDraft) -> ShareResult<()> {
    if draft.content.trim().is_empty() {
        return Err(ShareError::Validation("Content is required".to_string()));
    }
    Ok(())
}

/// Public link for a share id under `base_origin`
pub fn share_url(base_origin: &str, share_id: &str) -> String {
    format!("{}/shared/{}", base_origin.trim_end_matches('/'), share_id)
}
