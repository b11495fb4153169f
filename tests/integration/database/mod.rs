//! Schema and migration tests

pub mod concurrency_test;
