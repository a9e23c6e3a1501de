//! Generation request and response values.

use super::ContentDomainError;
use crate::platform::domain::Platform;
use serde::{Deserialize, Serialize};

/// Validated request for a drafted post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    platform: Option<Platform>,
}

impl GenerationRequest {
    /// Creates a request.
    ///
    /// `platform` selects the writing style; a blank value is treated as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`ContentDomainError::EmptyPrompt`] for blank prompts and
    /// [`ContentDomainError::Platform`] for unknown platforms.
    pub fn new(prompt: &str, platform: Option<&str>) -> Result<Self, ContentDomainError> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(ContentDomainError::EmptyPrompt);
        }
        let style = platform
            .filter(|value| !value.trim().is_empty())
            .map(Platform::try_from)
            .transpose()?;
        Ok(Self {
            prompt: trimmed.to_owned(),
            platform: style,
        })
    }

    /// Returns the trimmed prompt.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the platform whose style is requested.
    #[must_use]
    pub const fn platform(&self) -> Option<Platform> {
        self.platform
    }
}

/// Drafted post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Generated text.
    pub content: String,
}

impl GeneratedContent {
    /// Wraps generated text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
