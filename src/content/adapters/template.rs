//! Template-backed content generator.

use crate::content::{
    domain::{GeneratedContent, GenerationRequest},
    ports::{ContentGenerator, ContentGeneratorError, ContentGeneratorResult},
};
use crate::platform::domain::Platform;
use async_trait::async_trait;
use minijinja::{Environment, context};
use std::collections::HashMap;

const MAX_HASHTAGS: usize = 3;
const MAX_HASHTAG_CHARS: usize = 20;

const GENERIC_TEMPLATE: &str = "{{ prompt }}\n\n{{ hashtags }}";
const TIKTOK_TEMPLATE: &str =
    "{{ prompt }} \u{1f3ac}\n\nWatch until the end for the best part!\n\n{{ hashtags }}";
const XIAOHONGSHU_TEMPLATE: &str = "\u{2728} {{ prompt }} \u{2728}\n\n\
     \u{1f4cc} Why I love it:\n- it just works\n- worth sharing\n\n\
     Save this note for later! {{ hashtags }}";
const BILIBILI_TEMPLATE: &str = "\u{3010}{{ prompt }}\u{3011}\n\n\
     Everything you need in one video. If it helped, like, coin and favourite!";
const KUAISHOU_TEMPLATE: &str =
    "{{ prompt }}! Double tap if you agree \u{1f44d} {{ hashtags }}";
const ZHIHU_TEMPLATE: &str = "Q: {{ prompt }}\n\n\
     Short answer: it depends on what you need.\n\n\
     Longer answer: here is how I think about {{ prompt }}, step by step.";
const TOUTIAO_TEMPLATE: &str = "{{ prompt }}: what you need to know\n\n\
     The key facts, the context and what happens next.";

/// Content generator rendering per-platform style templates.
///
/// Produces deterministic drafts so the service runs without an external
/// model. Templates receive `prompt`, `platform` (display label or empty)
/// and `hashtags` (up to three tags derived from the prompt).
#[derive(Debug, Clone, Default)]
pub struct TemplateContentGenerator {
    overrides: HashMap<Platform, String>,
}

impl TemplateContentGenerator {
    /// Creates a generator with the built-in style templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the style template of one platform.
    #[must_use]
    pub fn with_template(mut self, platform: Platform, source: impl Into<String>) -> Self {
        self.overrides.insert(platform, source.into());
        self
    }

    fn template_for(&self, platform: Option<Platform>) -> &str {
        let Some(selected) = platform else {
            return GENERIC_TEMPLATE;
        };
        if let Some(custom) = self.overrides.get(&selected) {
            return custom;
        }
        match selected {
            Platform::Tiktok => TIKTOK_TEMPLATE,
            Platform::Xiaohongshu => XIAOHONGSHU_TEMPLATE,
            Platform::Bilibili => BILIBILI_TEMPLATE,
            Platform::Kuaishou => KUAISHOU_TEMPLATE,
            Platform::Zhihu => ZHIHU_TEMPLATE,
            Platform::Toutiao => TOUTIAO_TEMPLATE,
        }
    }
}

#[async_trait]
impl ContentGenerator for TemplateContentGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> ContentGeneratorResult<GeneratedContent> {
        let platform = request.platform();
        let environment = Environment::new();
        let rendered = environment
            .render_str(
                self.template_for(platform),
                context! {
                    prompt => request.prompt(),
                    platform => platform.map(Platform::label).unwrap_or_default(),
                    hashtags => hashtags(request.prompt()),
                },
            )
            .map_err(|err| ContentGeneratorError::Render {
                template: platform.map_or("generic", Platform::as_str).to_owned(),
                reason: err.to_string(),
            })?;
        Ok(GeneratedContent::new(rendered.trim_end()))
    }
}

/// Builds up to three hashtags from the words of a prompt.
fn hashtags(prompt: &str) -> String {
    prompt
        .split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty() && word.chars().count() <= MAX_HASHTAG_CHARS)
        .take(MAX_HASHTAGS)
        .map(|word| format!("#{}", word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}
