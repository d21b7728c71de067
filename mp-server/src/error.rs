//! Server error types.
//!
//! `ServerError` covers startup failures (config, logger) that abort the
//! process before it serves a request. `PageError` covers request-time
//! failures on the HTML surface; its responses never leak internals -
//! details go to the log, the client gets a generic page.

use crate::pages;

use mp_auth::AuthError;
use mp_db::DbError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] mp_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

/// Request-level failures for the HTML surface, with the HTTP status each
/// one maps to.
#[derive(Error, Debug)]
pub enum PageError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// A verified session token points at an identity the store no longer
    /// has. This is a consistency fault, not a logged-out state, so it
    /// surfaces as a hard failure instead of a login redirect (404).
    #[error("Session bound to missing identity {identity_id} {location}")]
    IdentityGone {
        identity_id: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            PageError::NotFound { .. } | PageError::IdentityGone { .. } => {
                (StatusCode::NOT_FOUND, "Not found")
            }
            PageError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        };

        (status, Html(pages::error_page(status, message))).into_response()
    }
}

/// Convert database errors to page errors
impl From<DbError> for PageError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose store details to clients
        log::error!("Database error: {}", e);
        PageError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth primitive errors to page errors
impl From<AuthError> for PageError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        // Hash or token machinery failed on the server side; token
        // *rejections* never reach this path (the session gate turns them
        // into login redirects)
        log::error!("Auth error: {}", e);
        PageError::Internal {
            message: "Credential operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
