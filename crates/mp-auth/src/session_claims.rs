use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime baked into every issued session. There is no expiry
/// *policy* in this system; this is just the signing layer's default so
/// tokens do not live forever.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 14 * 24 * 60 * 60;

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the identity id the session is bound to
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl SessionClaims {
    /// Claims for a fresh session bound to `identity_id`.
    pub fn new(identity_id: Uuid) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: identity_id.to_string(),
            exp: now + DEFAULT_SESSION_TTL_SECS,
            iat: now,
        }
    }

    /// Validate claims after signature verification.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (identity id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// The identity id this session is bound to.
    #[track_caller]
    pub fn identity_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a valid identity id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
