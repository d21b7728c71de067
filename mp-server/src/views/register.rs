//! Registration flow.

use crate::error::Result as PageResult;
use crate::pages;
use crate::state::AppState;
use crate::views::forms::RegisterForm;

use mp_core::Identity;
use mp_db::{DbError, IdentityRepository};

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

/// GET /register
pub async fn register_form() -> axum::response::Html<String> {
    pages::register_page(false)
}

/// POST /register
///
/// Hash first, then check, then insert. The existence check is only a
/// fast path for the common duplicate; the UNIQUE constraint decides the
/// race, and an insert-time violation lands on the same duplicate-account
/// page. Registration never signs the requester in.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> PageResult<Response> {
    let password_hash = mp_auth::password::hash_password(&form.password)?;

    let repo = IdentityRepository::new(state.pool.clone());
    if repo.find_by_email(&form.email).await?.is_some() {
        log::debug!("Registration rejected: email already taken");
        return Ok(pages::register_page(true).into_response());
    }

    let identity = Identity::new(form.email, form.name, password_hash);
    match repo.create(&identity).await {
        Ok(()) => {
            log::info!("Registered identity {}", identity.id);
            Ok(Redirect::to("/").into_response())
        }
        Err(DbError::DuplicateEmail { .. }) => {
            // Lost a concurrent race on the same email
            log::debug!("Registration rejected: email already taken (insert race)");
            Ok(pages::register_page(true).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
