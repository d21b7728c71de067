//! Home view.

use crate::pages;
use crate::views::extractors::optional_user::OptionalUser;

use axum::response::Html;

/// GET / and GET /index.html
///
/// Ungated; greets a signed-in requester by display name.
pub async fn home(OptionalUser(user): OptionalUser) -> Html<String> {
    pages::home_page(user.as_ref())
}
