//! One-way salted password transform and its matching verifier.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$...`) with a per-call
//! random salt, so the stored value is both salted and algorithm-tagged.
//! Verification re-derives the hash and compares in constant time inside
//! the `argon2` crate.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

/// Hash a plaintext password. Returns the PHC-format string to store.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Check a plaintext candidate against a stored PHC-format hash.
///
/// `Ok(false)` is the normal wrong-password outcome; `Err` means the stored
/// hash itself could not be parsed, which is a store consistency problem
/// rather than a login rejection.
#[track_caller]
pub fn verify_password(password: &str, stored_hash: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::MalformedHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::MalformedHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
