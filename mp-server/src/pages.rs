//! Server-rendered pages.
//!
//! Rendering stays a thin collaborator: one shared shell plus small
//! per-view bodies built with `format!`. Business rejections (duplicate
//! account, invalid credentials) re-render the same form with a warning
//! banner and an HTTP success status.

use mp_core::Identity;

use axum::http::StatusCode;
use axum::response::Html;

/// Minimal escaping for user-supplied text interpolated into markup, on
/// par with what a templating collaborator would do by default.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell. The nav reflects whether the request carries a
/// resolved identity.
fn layout(title: &str, signed_in: bool, body: &str) -> String {
    let nav = if signed_in {
        r#"<a href="/">Home</a> <a href="/secrets">Secrets</a> <a href="/download">Download</a> <a href="/logout">Log out</a>"#
    } else {
        r#"<a href="/">Home</a> <a href="/register">Register</a> <a href="/login">Log in</a>"#
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Member Portal</title>
</head>
<body>
<nav>{nav}</nav>
{body}
</body>
</html>
"#
    )
}

/// GET / - greets a resolved identity by display name
pub fn home_page(user: Option<&Identity>) -> Html<String> {
    let body = match user {
        Some(user) => format!(
            "<h1>Welcome back, {}.</h1>\n<p><a href=\"/secrets\">Go to the members area.</a></p>",
            escape(&user.display_name)
        ),
        None => String::from(
            "<h1>Welcome.</h1>\n<p>Register or log in to reach the members area.</p>",
        ),
    };

    Html(layout("Home", user.is_some(), &body))
}

/// GET|POST /register - `duplicate` re-renders with the duplicate-account banner
pub fn register_page(duplicate: bool) -> Html<String> {
    let warning = if duplicate {
        "<p class=\"warning\">An account with that email already exists. Log in instead.</p>\n"
    } else {
        ""
    };

    let body = format!(
        r#"{warning}<h1>Register</h1>
<form method="post" action="/register">
<label>Email <input type="email" name="email"></label>
<label>Name <input type="text" name="name"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Sign up</button>
</form>"#
    );

    Html(layout("Register", false, &body))
}

/// GET|POST /login - `invalid` re-renders with the invalid-credentials banner
pub fn login_page(invalid: bool) -> Html<String> {
    let warning = if invalid {
        "<p class=\"warning\">Email or password is incorrect.</p>\n"
    } else {
        ""
    };

    let body = format!(
        r#"{warning}<h1>Log in</h1>
<form method="post" action="/login">
<label>Email <input type="email" name="email"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Log in</button>
</form>"#
    );

    Html(layout("Log in", false, &body))
}

/// GET /secrets - the gated members page
pub fn secrets_page(user: &Identity) -> Html<String> {
    let body = format!(
        "<h1>Hi {}.</h1>\n<p>You made it to the members area.</p>\n<p><a href=\"/download\">Download the cheat sheet.</a></p>",
        escape(&user.display_name)
    );

    Html(layout("Secrets", true, &body))
}

/// Generic error page. `message` is already client-safe; internals never
/// reach this function.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>",
        status.as_u16(),
        escape(message)
    );

    layout("Error", false, &body)
}
