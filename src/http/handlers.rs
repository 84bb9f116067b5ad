//! HTTP request handlers for the vault search API

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::VaultError;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search handler
///
/// An empty or term-less query answers `200` with no results. Ranking
/// reads every ready document from disk, so it runs on the blocking pool.
///
/// # Errors
///
/// - `InvalidQuery`: query exceeds the maximum length (400)
/// - storage failures while loading candidates (500)
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, VaultError> {
    let response = services.blocking(move |s| s.search.search(req)).await?;
    Ok(Json(response))
}

/// List documents handler, newest first
pub async fn list_documents_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<DocumentsResponse>, VaultError> {
    let documents = services.blocking(|s| s.store.list_documents()).await?;
    Ok(Json(DocumentsResponse { documents }))
}

/// Get a single document with its text
pub async fn get_document_handler(
    State(services): State<Arc<Services>>,
    Path(id): Path<String>,
) -> Result<Json<Document>, VaultError> {
    let document = services.blocking(move |s| s.store.get_document(&id)).await?;
    Ok(Json(document))
}

/// Delete document handler
///
/// # Errors
///
/// - `DocumentNotFound`: no document with this id (404)
pub async fn delete_document_handler(
    State(services): State<Arc<Services>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, VaultError> {
    let target = id.clone();
    services
        .blocking(move |s| s.store.delete_document(&target))
        .await?;

    Ok(Json(DeleteResponse {
        status: "deleted".to_string(),
        id,
    }))
}
