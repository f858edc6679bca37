//! HTTP API Route Definitions

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Create the API router with all routes
///
/// Preflight requests are answered and every response carries
/// `Access-Control-Allow-Origin: *`.
pub fn create_router(app_state: AppState) -> Router {
    let ai = Router::new()
        .route("/summary", post(handlers::summary).fallback(handlers::unsupported_method))
        .route("/tags", post(handlers::tags).fallback(handlers::unsupported_method))
        .route("/grammar", post(handlers::grammar).fallback(handlers::unsupported_method))
        .route("/glossary", post(handlers::glossary).fallback(handlers::unsupported_method))
        .route("/transform", post(handlers::transform).fallback(handlers::unsupported_method));

    let notes = Router::new()
        .route("/share", post(handlers::create_share).fallback(handlers::unsupported_method))
        .route(
            "/shared/:share_id",
            get(handlers::get_shared_note).fallback(handlers::unsupported_method),
        );

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(handlers::health).fallback(handlers::unsupported_method))
        .route(
            "/shared/:share_id",
            get(handlers::shared_note_page).fallback(handlers::unsupported_method),
        )
        .nest("/api/ai", ai)
        .nest("/api/notes", notes)
        .fallback(handlers::not_found)
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
