pub mod error;
pub mod health;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod state;
pub mod views;


pub use error::{PageError, Result as PageResult, ServerError};
pub use routes::build_router;
pub use state::AppState;
pub use views::extractors::current_user::CurrentUser;
pub use views::extractors::optional_user::OptionalUser;
pub use views::forms::{LoginForm, RegisterForm};
