//! CLI integration tests.

mod common;

mod build_tests;
mod init_tests;
mod query_tests;
mod validate_tests;
