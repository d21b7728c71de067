#![allow(dead_code)]

mod test_db;

pub use test_db::{count_identities, create_test_pool};
