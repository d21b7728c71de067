use crate::health;
use crate::state::AppState;
use crate::views;

use axum::{Router, routing::get};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(views::home::home))
        .route("/index.html", get(views::home::home))
        .route(
            "/register",
            get(views::register::register_form).post(views::register::register),
        )
        .route(
            "/login",
            get(views::login::login_form).post(views::login::login),
        )
        .route("/logout", get(views::logout::logout))
        // Gated pages (session gate runs in the extractors)
        .route("/secrets", get(views::secrets::secrets))
        .route(
            "/download",
            get(views::download::download).post(views::download::download),
        )
        // Health check endpoint
        .route("/health", get(health::health))
        // Add shared state
        .with_state(state)
}
