//! Opaque platform credentials.

use std::fmt;

/// Opaque secret handed to platform adapters.
///
/// The value is never rendered by `Debug` or `Display` so credentials cannot
/// leak through logs or error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretToken(String);

impl SecretToken {
    /// Wraps a secret value without inspecting it.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exposes the raw secret to an adapter.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretToken(<redacted>)")
    }
}

/// Credential resolved for a (user, platform) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCredential {
    token: SecretToken,
    valid: bool,
}

impl AccountCredential {
    /// Creates a credential that may be used for publishing.
    #[must_use]
    pub const fn valid(token: SecretToken) -> Self {
        Self { token, valid: true }
    }

    /// Creates a credential flagged as unusable.
    #[must_use]
    pub const fn invalid(token: SecretToken) -> Self {
        Self {
            token,
            valid: false,
        }
    }

    /// Returns the opaque token.
    #[must_use]
    pub const fn token(&self) -> &SecretToken {
        &self.token
    }

    /// Returns `true` when the credential may be used for publishing.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}
