//! Unit tests for the content module.
