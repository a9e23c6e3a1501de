//! AI-assisted drafting of post bodies.
//!
//! The assistant is a single request/response collaborator: it is never
//! retried and never takes part in publish orchestration.
//!
//! - Domain types in [`domain`]
//! - The generator port in [`ports`]
//! - The template-backed reference generator in [`adapters`]
//! - The assistant service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
