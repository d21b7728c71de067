//! Login flow.

use crate::error::Result as PageResult;
use crate::pages;
use crate::state::AppState;
use crate::views::forms::LoginForm;

use mp_db::IdentityRepository;

use axum::{
    Form,
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
};

/// GET /login
pub async fn login_form() -> axum::response::Html<String> {
    pages::login_page(false)
}

/// POST /login
///
/// An unknown email takes the same invalid-credentials branch as a wrong
/// password: there is never a hash verification against an absent record,
/// and the response does not reveal which of the two failed.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> PageResult<Response> {
    let repo = IdentityRepository::new(state.pool.clone());

    let Some(identity) = repo.find_by_email(&form.email).await? else {
        log::debug!("Login rejected: unknown email");
        return Ok(pages::login_page(true).into_response());
    };

    if !mp_auth::password::verify_password(&form.password, &identity.password_hash)? {
        log::debug!("Login rejected: password mismatch for {}", identity.id);
        return Ok(pages::login_page(true).into_response());
    }

    let token = state.sessions.issue(identity.id)?;
    log::info!("Session established for {}", identity.id);

    Ok((
        [(header::SET_COOKIE, mp_auth::create_session_cookie(&token))],
        Redirect::to("/secrets"),
    )
        .into_response())
}
