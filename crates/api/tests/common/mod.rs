//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full application router (same middleware stack as the
//! binary) against a throwaway uploads directory, and provides request
//! and body helpers driving the router through `tower::ServiceExt`
//! without a TCP listener.

#![allow(dead_code)] // each test binary uses a different subset

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use pressroom_api::auth::jwt::JwtConfig;
use pressroom_api::config::{AdminConfig, ServerConfig};
use pressroom_api::router::build_app_router;
use pressroom_api::state::AppState;

/// Credentials wired into every test configuration.
pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Signing secret wired into every test configuration.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Boundary used by the multipart body builder.
pub const MULTIPART_BOUNDARY: &str = "pressroom-test-boundary-7MA4YWxkTrZu0gW";

/// Build a test `ServerConfig` rooted at the given uploads directory.
pub fn test_config(uploads_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        uploads_dir,
        admin: AdminConfig {
            email: TEST_ADMIN_EMAIL.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_hours: 8,
        },
    }
}

/// Build the full application router with a throwaway uploads directory.
pub fn build_test_app(pool: PgPool) -> Router {
    let dir = tempfile::tempdir().expect("create temp uploads dir");
    // Leak the TempDir so the directory outlives the returned router.
    let dir = Box::leak(Box::new(dir));
    build_test_app_with_uploads(pool, dir.path().to_path_buf())
}

/// Build the full application router rooted at a caller-owned uploads
/// directory (for tests that inspect the stored files).
pub fn build_test_app_with_uploads(pool: PgPool, uploads_dir: PathBuf) -> Router {
    let config = test_config(uploads_dir);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Empty-body authenticated POST (workflow actions).
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

/// One part of a multipart mutation request.
pub enum Part<'a> {
    /// The `meta` field: a JSON-encoded metadata string.
    Meta(&'a str),
    /// One `files` upload.
    File {
        filename: &'a str,
        bytes: &'a [u8],
    },
}

/// Assemble a `multipart/form-data` body in the shape the content
/// endpoints expect.
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Meta(json) => {
                body.extend_from_slice(b"Content-Disposition: form-data; name=\"meta\"\r\n\r\n");
                body.extend_from_slice(json.as_bytes());
            }
            Part::File { filename, bytes } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"files\"; filename=\"{filename}\"\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Send an authenticated multipart request (create or update).
pub async fn multipart_request(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    parts: &[Part<'_>],
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Log in with the test admin credentials and return the bearer token.
pub async fn login_admin(app: Router) -> String {
    let body = serde_json::json!({
        "email": TEST_ADMIN_EMAIL,
        "password": TEST_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

/// Create a content item through the API and return the response JSON.
pub async fn create_content(
    app: Router,
    token: &str,
    meta: &str,
    files: &[(&str, &[u8])],
) -> serde_json::Value {
    let mut parts = vec![Part::Meta(meta)];
    for (filename, bytes) in files.iter().copied() {
        parts.push(Part::File { filename, bytes });
    }

    let response = multipart_request(app, Method::POST, "/content", token, &parts).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
