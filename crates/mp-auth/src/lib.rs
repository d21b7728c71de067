pub mod cookie;
pub mod error;
pub mod password;
pub mod session_claims;
pub mod session_keys;

pub use cookie::{
    SESSION_COOKIE_NAME, create_logout_cookie, create_session_cookie, session_token_from_header,
};
pub use error::{AuthError, Result};
pub use session_claims::SessionClaims;
pub use session_keys::SessionKeys;

#[cfg(test)]
mod tests;
