//! The gated members page.

use crate::pages;
use crate::views::extractors::current_user::CurrentUser;

use axum::response::Html;

/// GET /secrets
///
/// The gate has already resolved the identity by the time this runs.
pub async fn secrets(CurrentUser(user): CurrentUser) -> Html<String> {
    pages::secrets_page(&user)
}
