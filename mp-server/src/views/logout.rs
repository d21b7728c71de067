//! Logout.

use axum::{http::header, response::Redirect};

/// GET /logout
///
/// Unconditionally clears the session cookie and sends the client home.
/// Idempotent: with no active session the expired cookie is a no-op.
pub async fn logout() -> impl axum::response::IntoResponse {
    (
        [(header::SET_COOKIE, mp_auth::create_logout_cookie())],
        Redirect::to("/"),
    )
}
