#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use psnotes_api::config::{CorsOrigins, ServerConfig};
use psnotes_api::router::build_app_router;
use psnotes_api::state::AppState;
use psnotes_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
    }
}

/// Open a fresh in-memory database with the `notes` table in place.
pub async fn test_pool() -> DbPool {
    let pool = psnotes_db::create_pool("sqlite::memory:", 1).await.unwrap();
    psnotes_db::ensure_schema(&pool).await.unwrap();
    pool
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a request with a raw (possibly malformed) JSON body.
pub async fn send_raw(app: Router, method: Method, uri: &str, raw: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a note through the API and return its id.
pub async fn create_note(pool: &DbPool, body: serde_json::Value) -> String {
    let response = post_json(build_test_app(pool.clone()), "/notes", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

/// List notes through the API.
pub async fn list_notes(pool: &DbPool, uri: &str) -> Vec<serde_json::Value> {
    let response = get(build_test_app(pool.clone()), uri).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}
