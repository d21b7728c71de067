//! Session gate: resolves the session cookie to an Identity before a
//! gated handler body runs.

use crate::error::PageError;
use crate::state::AppState;

use mp_auth::SessionClaims;
use mp_db::IdentityRepository;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use error_location::ErrorLocation;

/// Identity resolved from the request's session cookie.
///
/// Gated routes take this as an argument; when no usable session exists
/// the handler body never runs and the client is redirected to the login
/// view instead.
pub struct CurrentUser(pub mp_core::Identity);

/// Why the gate refused to produce an identity.
pub enum GateRejection {
    /// No usable session - send the client to the login form
    LoginRedirect,
    /// The token was ours and valid, but the state behind it is broken
    Fault(PageError),
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            GateRejection::LoginRedirect => Redirect::to("/login").into_response(),
            GateRejection::Fault(e) => e.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = GateRejection;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(claims) = session_claims(parts, state) else {
                return Err(GateRejection::LoginRedirect);
            };

            // The signature checked out, so a subject we cannot parse is
            // something we signed wrong, not a client problem
            let identity_id = claims.identity_id().map_err(|e| {
                GateRejection::Fault(PageError::Internal {
                    message: format!("session subject is not an identity id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })?;

            let repo = IdentityRepository::new(state.pool.clone());
            let identity = repo
                .find_by_id(identity_id)
                .await
                .map_err(|e| GateRejection::Fault(e.into()))?;

            match identity {
                Some(identity) => Ok(CurrentUser(identity)),
                // Fail loudly: a verified session pointing at a record the
                // store no longer has is a consistency fault, not a
                // logged-out client
                None => Err(GateRejection::Fault(PageError::IdentityGone {
                    identity_id: identity_id.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })),
            }
        }
    }
}

/// Extract and verify session claims from the Cookie header.
///
/// `None` covers every ordinary "not logged in" shape: no cookie, no
/// session entry in it, bad signature, expired token.
pub(crate) fn session_claims(parts: &Parts, state: &AppState) -> Option<SessionClaims> {
    let header_value = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    let token = mp_auth::session_token_from_header(header_value)?;

    match state.sessions.verify(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            log::debug!("Rejecting session token: {}", e);
            None
        }
    }
}
