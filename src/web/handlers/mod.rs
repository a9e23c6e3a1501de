//! Request handlers grouped by resource.

pub mod accounts;
pub mod ai;
pub mod health;
pub mod tasks;
