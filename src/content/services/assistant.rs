//! Service turning raw prompts into drafted post bodies.

use crate::content::{
    domain::{ContentDomainError, GeneratedContent, GenerationRequest},
    ports::{ContentGenerator, ContentGeneratorError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for content assistance.
#[derive(Debug, Error)]
pub enum ContentAssistError {
    /// The request was invalid.
    #[error(transparent)]
    Domain(#[from] ContentDomainError),
    /// The generator failed.
    #[error(transparent)]
    Generator(#[from] ContentGeneratorError),
}

/// Result type for content assistance.
pub type ContentAssistResult<T> = Result<T, ContentAssistError>;

/// Validates prompts and forwards them to a [`ContentGenerator`].
pub struct ContentAssistService<G>
where
    G: ContentGenerator + ?Sized,
{
    generator: Arc<G>,
}

impl<G> ContentAssistService<G>
where
    G: ContentGenerator + ?Sized,
{
    /// Creates a new assistant service.
    #[must_use]
    pub const fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Drafts a post body for the prompt, styled for `platform` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ContentAssistError::Domain`] for blank prompts or unknown
    /// platforms and [`ContentAssistError::Generator`] when generation fails.
    pub async fn generate(
        &self,
        prompt: &str,
        platform: Option<&str>,
    ) -> ContentAssistResult<GeneratedContent> {
        let request = GenerationRequest::new(prompt, platform)?;
        let generated = self.generator.generate(&request).await?;
        tracing::debug!(
            platform = request.platform().map_or("generic", |p| p.as_str()),
            chars = generated.content.chars().count(),
            "generated draft content"
        );
        Ok(generated)
    }
}

impl<G> Clone for ContentAssistService<G>
where
    G: ContentGenerator + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}
