//! Shared note handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use super::AppState;
use crate::api::error::ApiError;
use crate::api::types::*;
use crate::share::{render_not_found_page, render_note_page, share_url, ShareError};
use crate::types::NoteDraft;

/// Origin the client used to reach us, from the configured public URL or
/// the request's Host / X-Forwarded-Proto headers
fn request_origin(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(public_url) = &state.public_url {
        return public_url.trim_end_matches('/').to_string();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .filter(|p| *p == "https" || *p == "http")
        .unwrap_or("http");
    format!("{}://{}", scheme, host)
}

/// Create a share link for a note
pub async fn create_share(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NoteDraft>, JsonRejection>,
) -> Result<Json<ShareResponse>, ApiError> {
    let Json(draft) = payload?;
    debug!("HTTP share request: {} bytes of content", draft.content.len());

    let note = state.shares.create(draft)?;
    let url = share_url(&request_origin(&state, &headers), &note.share_id);
    info!("Shared note {} as {}", note.title, note.share_id);

    Ok(Json(ShareResponse {
        share_id: note.share_id,
        share_url: url.clone(),
        url,
        success: true,
    }))
}

/// Shared note as JSON
pub async fn get_shared_note(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> Result<Json<SharedNoteResponse>, ApiError> {
    let note = state.shares.get(&share_id)?;
    Ok(Json(SharedNoteResponse {
        note,
        success: true,
    }))
}

/// Shared note as a standalone HTML page
pub async fn shared_note_page(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> Response {
    match state.shares.get(&share_id) {
        Ok(note) => Html(render_note_page(&note)).into_response(),
        Err(ShareError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Html(render_not_found_page())).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
