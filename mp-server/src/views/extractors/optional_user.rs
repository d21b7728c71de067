//! Best-effort identity resolution for ungated pages.

use crate::error::PageError;
use crate::state::AppState;
use crate::views::extractors::current_user::session_claims;

use mp_db::IdentityRepository;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Identity of the requester, when a valid session is present.
///
/// Used by the ungated views (home shows the display name when signed
/// in). An anonymous request resolves to `None`; a verified session that
/// points at missing state still fails loudly, same as the gate.
pub struct OptionalUser(pub Option<mp_core::Identity>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = PageError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(claims) = session_claims(parts, state) else {
                return Ok(OptionalUser(None));
            };

            let identity_id = claims.identity_id().map_err(|e| PageError::Internal {
                message: format!("session subject is not an identity id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let repo = IdentityRepository::new(state.pool.clone());
            let identity = repo.find_by_id(identity_id).await?;

            match identity {
                Some(identity) => Ok(OptionalUser(Some(identity))),
                None => Err(PageError::IdentityGone {
                    identity_id: identity_id.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
