//! Port contracts for connected accounts and credential lookup.

pub mod credential_store;
pub mod repository;

pub use credential_store::{CredentialStore, CredentialStoreError, CredentialStoreResult};
pub use repository::{AccountRepository, AccountRepositoryError, AccountRepositoryResult};
