//! Publish tasks and their durable lifecycle record.
//!
//! A task is created in `draft`, moved to `publishing` by the orchestrator,
//! and settles into `published`, `partial_success` or `failed`. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Authoring services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
