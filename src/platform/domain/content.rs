//! Content payload handed to platform adapters and the identifiers they return.

use super::PlatformDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content delivered to a platform's publishing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishContent {
    title: String,
    body: String,
    media_url: Option<String>,
}

impl PublishContent {
    /// Creates a content payload.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        media_url: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            media_url,
        }
    }

    /// Returns the post title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the post body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the attached media URL, if any.
    #[must_use]
    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }
}

/// Identifier assigned to a published post by the external platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalPostId(String);

impl ExternalPostId {
    /// Creates a validated external post identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformDomainError::EmptyExternalPostId`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, PlatformDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(PlatformDomainError::EmptyExternalPostId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ExternalPostId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ExternalPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
