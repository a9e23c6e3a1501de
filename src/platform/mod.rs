//! Target platforms and the publishing capability each one implements.
//!
//! - Domain types in [`domain`]
//! - The adapter port in [`ports`]
//! - Reference adapters and the adapter registry in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
