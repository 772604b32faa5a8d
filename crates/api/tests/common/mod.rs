#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use folio_api::config::{MediaConfig, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::storage::LocalObjectStore;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Largest upload the test server accepts.
pub const TEST_MAX_UPLOAD_BYTES: u64 = 1024 * 1024;

const BOUNDARY: &str = "folio-test-boundary";

/// Directory test uploads are written to. Keys are unique per upload, so
/// tests can share it.
pub fn media_dir() -> PathBuf {
    std::env::temp_dir().join("folio-api-tests")
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a 1 MiB upload limit.
pub fn test_config() -> ServerConfig {
    test_config_with_media(&media_dir())
}

/// [`test_config`] with uploads written to `dir`.
pub fn test_config_with_media(dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        media: MediaConfig {
            dir: dir.to_path_buf(),
            public_url: "http://localhost:3000/media".to_string(),
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        },
    }
}

/// Build the full application router, with all middleware layers, on top of
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media(pool, &media_dir())
}

/// [`build_test_app`] with a private upload directory, for tests that
/// inspect what was written.
pub fn build_test_app_with_media(pool: PgPool, dir: &Path) -> Router {
    let config = test_config_with_media(dir);
    let store = Arc::new(LocalObjectStore::new(
        &config.media.dir,
        &config.media.public_url,
    ));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, "PUT", uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, "PATCH", uri, body).await
}

/// A part of a multipart upload body.
pub enum Part<'a> {
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

/// POST a `multipart/form-data` body built from `parts`.
pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Upload a single `file` part.
pub async fn upload_file(
    app: Router,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    post_multipart(
        app,
        "/api/v1/media",
        &[Part::File {
            name: "file",
            file_name,
            content_type,
            bytes,
        }],
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a portfolio item with sensible defaults merged with `overrides`,
/// returning the created item.
pub async fn create_item(pool: &PgPool, overrides: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "title": "Creative Portrait Series",
        "category": "personal",
        "image_url": "/images/portfolio/personal-1.jpg",
    });
    if let (Some(base), Some(extra)) = (payload.as_object_mut(), overrides.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }
    let response = post_json(build_test_app(pool.clone()), "/api/v1/portfolio", payload).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}
