//! API endpoint tests

pub mod posts_test;
pub mod profile_test;
