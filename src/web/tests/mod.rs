//! Unit tests for the HTTP surface.

mod error_tests;
