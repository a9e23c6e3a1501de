//! Connected platform accounts and credential lookup.
//!
//! Accounts are an external collaborator of the publish orchestrator: the
//! orchestrator only consumes the [`ports::CredentialStore`] contract. The
//! registry service and in-memory adapter let the service run standalone.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
