//! Library integration tests.

mod content_tests;
