//! Text-generation port.

use crate::content::domain::{GeneratedContent, GenerationRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for content generators.
pub type ContentGeneratorResult<T> = Result<T, ContentGeneratorError>;

/// Produces a post body from a prompt.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generates content for the request.
    ///
    /// # Errors
    ///
    /// Returns [`ContentGeneratorError`] when the backend cannot produce text.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> ContentGeneratorResult<GeneratedContent>;
}

/// Errors returned by content generators.
#[derive(Debug, Clone, Error)]
pub enum ContentGeneratorError {
    /// A style template failed to render.
    #[error("failed to render {template} template: {reason}")]
    Render {
        /// Template name.
        template: String,
        /// Renderer message.
        reason: String,
    },

    /// The generation backend failed.
    #[error("generation backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl ContentGeneratorError {
    /// Wraps a backend failure.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
