//! Unit tests for the account module.

mod service_tests;
