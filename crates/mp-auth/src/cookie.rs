//! Session cookie plumbing: `Set-Cookie` values for login/logout and the
//! matching parser for the request-side `Cookie` header.

/// Cookie the session token travels in.
pub const SESSION_COOKIE_NAME: &str = "mp_session";

/// `Set-Cookie` value that installs a session token.
///
/// HttpOnly keeps the token away from page scripts; SameSite=Lax is the
/// collaborating framework default this system leans on.
pub fn create_session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that clears the session cookie. Safe to send whether
/// or not a session exists.
pub fn create_logout_cookie() -> String {
    format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Pull the session token out of a `Cookie` request header value, if present.
pub fn session_token_from_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE_NAME)?.strip_prefix('='))
        .filter(|token| !token.is_empty())
}
