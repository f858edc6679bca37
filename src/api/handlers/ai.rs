//! AI text-transform handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::debug;

use super::AppState;
use crate::api::error::ApiError;
use crate::api::types::*;
use crate::transform::{Operation, TransformRequest, TransformResult};

async fn run(state: &AppState, request: TransformRequest) -> Result<Json<TransformResult>, ApiError> {
    debug!(
        "HTTP {} request: {} bytes, max_items={:?}",
        request.operation,
        request.text.len(),
        request.max_items
    );
    let result = state.transform.transform(request).await?;
    Ok(Json(result))
}

/// Summary endpoint
pub async fn summary(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<TransformResult>, ApiError> {
    let Json(body) = payload?;
    run(&state, TransformRequest::new(Operation::Summary, body.text)).await
}

/// Tag suggestion endpoint
pub async fn tags(
    State(state): State<AppState>,
    payload: Result<Json<TagsRequest>, JsonRejection>,
) -> Result<Json<TransformResult>, ApiError> {
    let Json(body) = payload?;
    let request = TransformRequest {
        text: body.text,
        operation: Operation::Tags,
        max_items: body.max,
    };
    run(&state, request).await
}

/// Grammar correction endpoint
pub async fn grammar(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<TransformResult>, ApiError> {
    let Json(body) = payload?;
    run(&state, TransformRequest::new(Operation::Grammar, body.text)).await
}

/// Glossary extraction endpoint
pub async fn glossary(
    State(state): State<AppState>,
    payload: Result<Json<GlossaryRequest>, JsonRejection>,
) -> Result<Json<TransformResult>, ApiError> {
    let Json(body) = payload?;
    let request = TransformRequest {
        text: body.text,
        operation: Operation::Glossary,
        max_items: body.max_terms,
    };
    run(&state, request).await
}

/// Generic endpoint taking the operation in the body
pub async fn transform(
    State(state): State<AppState>,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Result<Json<TransformResponse>, ApiError> {
    let Json(request) = payload?;
    let operation = request.operation;
    let Json(result) = run(&state, request).await?;
    Ok(Json(TransformResponse { operation, result }))
}
