//! REST API tests against the full router

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt as TowerServiceExt;
use vault_search::http;

use crate::common::{create_test_services, store_document};

fn create_test_app() -> (Router, std::sync::Arc<vault_search::Services>, TempDir) {
    let (services, temp) = create_test_services();
    (http::router(services.clone()), services, temp)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn search_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _services, _temp) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_search_returns_ranked_results() {
    let (app, services, _temp) = create_test_app();
    store_document(&services, "sales-deck.txt", "Unrelated content about logistics.");
    store_document(&services, "notes.txt", "sales call notes");

    let response = app
        .oneshot(search_request(json!({"query": "sales"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["filename"], "sales-deck.txt");
    assert_eq!(results[0]["score"], 10);
    assert_eq!(results[1]["score"], 1);
    assert_eq!(results[1]["matches"][0]["position"], 0);
}

#[tokio::test]
async fn test_search_empty_query_is_ok() {
    let (app, _services, _temp) = create_test_app();

    let response = app
        .oneshot(search_request(json!({"query": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_search_non_string_query_is_ok() {
    let (app, _services, _temp) = create_test_app();

    let response = app
        .oneshot(search_request(json!({"query": null, "limit": "ten"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["results"], json!([]));
}

#[tokio::test]
async fn test_search_overlong_query_is_bad_request() {
    let (app, _services, _temp) = create_test_app();

    let response = app
        .oneshot(search_request(json!({"query": "z".repeat(501)})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("maximum length"));
}

#[tokio::test]
async fn test_document_lifecycle() {
    let (app, services, _temp) = create_test_app();
    let doc = store_document(&services, "memo.txt", "quarterly memo");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/documents")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["documents"][0]["id"], doc.id.as_str());

    let uri = format!("/api/v1/documents/{}", doc.id);
    let response = app
        .clone()
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["text"], "quarterly memo");
    assert_eq!(body["status"], "ready");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "deleted");

    let response = app
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_document() {
    let (app, _services, _temp) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/documents/unknown-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["status"], 404);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _services, _temp) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
