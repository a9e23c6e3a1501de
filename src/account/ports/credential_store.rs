//! Credential lookup port consumed by the publish orchestrator.

use crate::account::domain::{AccountCredential, UserId};
use crate::platform::domain::Platform;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential lookups.
pub type CredentialStoreResult<T> = Result<T, CredentialStoreError>;

/// Resolves the credential a user has connected for a platform.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the credential for `(owner, platform)`.
    ///
    /// Returns `None` when the user has not connected an account on the
    /// platform. The returned credential may be flagged invalid.
    async fn resolve(
        &self,
        owner: &UserId,
        platform: Platform,
    ) -> CredentialStoreResult<Option<AccountCredential>>;
}

/// Errors returned by credential store implementations.
#[derive(Debug, Clone, Error)]
#[error("credential lookup failed: {0}")]
pub struct CredentialStoreError(Arc<dyn std::error::Error + Send + Sync>);

impl CredentialStoreError {
    /// Wraps a lookup failure.
    #[must_use]
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
