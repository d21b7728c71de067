pub mod current_user;
pub mod optional_user;
