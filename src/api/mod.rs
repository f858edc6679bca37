//! HTTP API Server Module
//!
//! REST surface for the transform service and the share store.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use handlers::AppState;
pub use routes::create_router;
pub use server::HttpServer;
