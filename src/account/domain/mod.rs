//! Domain model for connected platform accounts.

mod account;
mod credential;
mod error;
mod ids;

pub use account::{ConnectedAccount, NewAccount};
pub use credential::{AccountCredential, SecretToken};
pub use error::AccountDomainError;
pub use ids::{AccountId, UserId};
