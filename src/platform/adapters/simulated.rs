//! Simulated platform adapters enforcing each platform's content rules.

use crate::account::domain::AccountCredential;
use crate::platform::{
    domain::{ExternalPostId, Platform, PublishContent},
    ports::{PlatformAdapter, PlatformError, PlatformResult},
};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Number of hash bytes rendered into a simulated post identifier.
const POST_ID_HASH_BYTES: usize = 6;

/// Content constraints of a single platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Prefix of generated external post identifiers.
    pub post_id_prefix: &'static str,
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum body length in characters.
    pub max_body_chars: usize,
    /// Whether the platform only accepts posts with attached media.
    pub requires_media: bool,
}

impl PlatformProfile {
    /// Returns the profile of a platform.
    #[must_use]
    pub const fn of(platform: Platform) -> Self {
        match platform {
            Platform::Tiktok => Self {
                post_id_prefix: "tt",
                max_title_chars: 55,
                max_body_chars: 2_200,
                requires_media: true,
            },
            Platform::Xiaohongshu => Self {
                post_id_prefix: "xhs",
                max_title_chars: 20,
                max_body_chars: 1_000,
                requires_media: true,
            },
            Platform::Bilibili => Self {
                post_id_prefix: "bili",
                max_title_chars: 80,
                max_body_chars: 2_000,
                requires_media: true,
            },
            Platform::Kuaishou => Self {
                post_id_prefix: "ks",
                max_title_chars: 30,
                max_body_chars: 500,
                requires_media: true,
            },
            Platform::Zhihu => Self {
                post_id_prefix: "zh",
                max_title_chars: 100,
                max_body_chars: 50_000,
                requires_media: false,
            },
            Platform::Toutiao => Self {
                post_id_prefix: "tout",
                max_title_chars: 30,
                max_body_chars: 20_000,
                requires_media: false,
            },
        }
    }
}

/// Deterministic stand-in for a real platform API.
///
/// Validates content against the platform's [`PlatformProfile`] and derives
/// the external post identifier from a SHA-256 digest of the content, so
/// publishing the same content twice yields the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPlatformAdapter {
    platform: Platform,
    profile: PlatformProfile,
}

impl SimulatedPlatformAdapter {
    /// Creates a simulated adapter for the platform.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self {
            platform,
            profile: PlatformProfile::of(platform),
        }
    }

    /// Returns the enforced profile.
    #[must_use]
    pub const fn profile(&self) -> PlatformProfile {
        self.profile
    }

    fn validate(&self, content: &PublishContent) -> PlatformResult<()> {
        let title_chars = content.title().chars().count();
        if title_chars > self.profile.max_title_chars {
            return Err(PlatformError::content_rejected(format!(
                "title has {title_chars} characters, {} allows {}",
                self.platform.label(),
                self.profile.max_title_chars
            )));
        }

        let body_chars = content.body().chars().count();
        if body_chars > self.profile.max_body_chars {
            return Err(PlatformError::content_rejected(format!(
                "body has {body_chars} characters, {} allows {}",
                self.platform.label(),
                self.profile.max_body_chars
            )));
        }

        let has_media = content.media_url().is_some_and(|url| !url.trim().is_empty());
        if self.profile.requires_media && !has_media {
            return Err(PlatformError::content_rejected(format!(
                "{} requires attached media",
                self.platform.label()
            )));
        }
        Ok(())
    }

    fn post_id(&self, content: &PublishContent) -> PlatformResult<ExternalPostId> {
        let mut hasher = Sha256::new();
        for part in [
            self.platform.as_str(),
            content.title(),
            content.body(),
            content.media_url().unwrap_or_default(),
        ] {
            hasher.update(part.as_bytes());
            hasher.update([0_u8]);
        }
        let digest = hasher.finalize();

        let mut rendered = format!("{}_", self.profile.post_id_prefix);
        for byte in digest.iter().take(POST_ID_HASH_BYTES) {
            write!(rendered, "{byte:02x}")
                .map_err(|err| PlatformError::unknown(err.to_string()))?;
        }
        ExternalPostId::new(rendered).map_err(|err| PlatformError::unknown(err.to_string()))
    }
}

#[async_trait]
impl PlatformAdapter for SimulatedPlatformAdapter {
    async fn publish(
        &self,
        content: &PublishContent,
        credential: &AccountCredential,
    ) -> PlatformResult<ExternalPostId> {
        if !credential.is_valid() || credential.token().expose().trim().is_empty() {
            return Err(PlatformError::auth_invalid(format!(
                "{} rejected the account credential",
                self.platform.label()
            )));
        }
        self.validate(content)?;
        self.post_id(content)
    }
}
