//! Identity entity - one durable record per registered account.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account. Created by the registration flow, immutable
/// afterwards; the email is the external login key and is unique across
/// all identities.
///
/// Deliberately not serializable: `password_hash` must never leave the
/// process, so nothing is allowed to encode an `Identity` wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    /// Free-form name shown in page headers. Not unique.
    pub display_name: String,
    /// PHC-format string produced by the password hasher. Never the plaintext.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity with a freshly assigned id.
    pub fn new(email: String, display_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
