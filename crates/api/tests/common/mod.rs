use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use quriousity_api::config::{LogFormat, ServerConfig};
use quriousity_api::router::build_app_router;
use quriousity_api::state::AppState;
use quriousity_db::{AvatarStore, CatalogStore};

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "quriousity-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and avatars under the given directory.
pub fn test_config(avatar_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        avatar_dir: avatar_dir.to_path_buf(),
        current_user_id: "user1".to_string(),
        log_format: LogFormat::Text,
    }
}

/// A freshly seeded application plus the temporary avatar directory it owns.
///
/// Keep the `TempDir` alive for as long as the router is used.
pub struct TestApp {
    pub router: Router,
    pub avatar_dir: TempDir,
}

/// Build the full application router, with all middleware layers, over a
/// freshly seeded catalog and an empty avatar directory.
pub async fn build_test_app() -> TestApp {
    let avatar_dir = tempfile::tempdir().unwrap();
    let config = test_config(avatar_dir.path());

    let state = AppState {
        catalog: Arc::new(CatalogStore::seeded().unwrap()),
        avatars: Arc::new(AvatarStore::open(avatar_dir.path()).await.unwrap()),
        config: Arc::new(config.clone()),
    };

    let router = build_app_router(state, &config).unwrap();
    TestApp { router, avatar_dir }
}

/// Send a bodiless request.
pub async fn send(app: &Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a GET request.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

/// Send a request with a JSON body.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Build a `multipart/form-data` body with one file field.
pub fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a multipart body built by [`multipart_body`].
pub async fn post_multipart(app: &Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
