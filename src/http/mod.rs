//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from mcp/.
//!
//! Exposes search and document management over axum.

pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

pub use handlers::*;

/// Build the API router
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/search", post(search_handler))
        .route("/api/v1/documents", get(list_documents_handler))
        .route(
            "/api/v1/documents/:id",
            get(get_document_handler).delete(delete_document_handler),
        )
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
