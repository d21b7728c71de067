#![allow(dead_code)]

//! Test infrastructure for mp-server route tests

use mp_auth::SessionKeys;
use mp_server::AppState;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = sqlx::sqlite::SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/mp-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing. The assets dir points at the crate's real
/// static tree so the download serves the checked-in resource.
pub async fn create_test_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        sessions: Arc::new(SessionKeys::from_secret(TEST_SECRET)),
        assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
    }
}

/// GET `path`, optionally with a Cookie header
pub async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// POST a urlencoded form body to `path`
pub async fn post_form(app: &Router, path: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Register through the real handler
pub async fn register(app: &Router, email: &str, name: &str, password: &str) -> Response<Body> {
    post_form(
        app,
        "/register",
        &format!("email={email}&name={name}&password={password}"),
    )
    .await
}

/// Log in through the real handler
pub async fn login(app: &Router, email: &str, password: &str) -> Response<Body> {
    post_form(app, "/login", &format!("email={email}&password={password}")).await
}

/// Extract the `name=value` session pair a browser would echo back from a
/// response's Set-Cookie header
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    Some(set_cookie.split(';').next().unwrap().to_string())
}

/// Location header as a string
pub fn location(response: &Response<Body>) -> Option<String> {
    Some(
        response
            .headers()
            .get(header::LOCATION)?
            .to_str()
            .ok()?
            .to_string(),
    )
}

/// Collect a response body to a String
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Count all rows in the identities table
pub async fn count_identities(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM identities")
        .fetch_one(pool)
        .await
        .expect("Failed to count identities")
}
