//! Form payloads for the registration and login flows.
//!
//! Fields arrive as opaque strings: empty or malformed values are accepted
//! as-is (a known gap carried over deliberately); only a missing field
//! fails extraction.

use serde::Deserialize;

/// POST /register body
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// POST /login body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
