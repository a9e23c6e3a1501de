//! Platform identifiers and the validated target-platform set.

use super::PlatformDomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Third-party platform a task can be published to.
///
/// Variants are declared in canonical order, which is also the order used
/// for fan-out logging and per-platform result listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// TikTok (Douyin).
    Tiktok,
    /// Xiaohongshu (RED).
    Xiaohongshu,
    /// Bilibili.
    Bilibili,
    /// Kuaishou.
    Kuaishou,
    /// Zhihu.
    Zhihu,
    /// Toutiao.
    Toutiao,
}

impl Platform {
    /// Every supported platform in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Tiktok,
        Self::Xiaohongshu,
        Self::Bilibili,
        Self::Kuaishou,
        Self::Zhihu,
        Self::Toutiao,
    ];

    /// Returns the canonical boundary identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tiktok => "tiktok",
            Self::Xiaohongshu => "xiaohongshu",
            Self::Bilibili => "bilibili",
            Self::Kuaishou => "kuaishou",
            Self::Zhihu => "zhihu",
            Self::Toutiao => "toutiao",
        }
    }

    /// Returns a human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tiktok => "TikTok",
            Self::Xiaohongshu => "Xiaohongshu",
            Self::Bilibili => "Bilibili",
            Self::Kuaishou => "Kuaishou",
            Self::Zhihu => "Zhihu",
            Self::Toutiao => "Toutiao",
        }
    }
}

impl TryFrom<&str> for Platform {
    type Error = PlatformDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "tiktok" => Ok(Self::Tiktok),
            "xiaohongshu" => Ok(Self::Xiaohongshu),
            "bilibili" => Ok(Self::Bilibili),
            "kuaishou" => Ok(Self::Kuaishou),
            "zhihu" => Ok(Self::Zhihu),
            "toutiao" => Ok(Self::Toutiao),
            _ => Err(PlatformDomainError::UnknownPlatform(value.to_owned())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty, deduplicated set of target platforms.
///
/// The boundary representation is a comma-joined string such as
/// `"tiktok,bilibili"`. Parsing trims each segment, drops duplicates and
/// rejects empty segments, so `"tiktok,,zhihu"` and `""` are both invalid.
/// Iteration always follows canonical [`Platform`] order.
///
/// # Examples
///
/// ```rust
/// use crosspost::platform::domain::{Platform, PlatformSet};
///
/// let set = PlatformSet::parse("zhihu, tiktok,zhihu").expect("valid");
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.to_string(), "tiktok,zhihu");
/// assert!(set.contains(Platform::Zhihu));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformSet(BTreeSet<Platform>);

impl PlatformSet {
    /// Parses the comma-joined boundary representation.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformDomainError::EmptyPlatformSegment`] when any segment
    /// is blank and [`PlatformDomainError::UnknownPlatform`] for identifiers
    /// outside the supported set.
    pub fn parse(raw: &str) -> Result<Self, PlatformDomainError> {
        let mut platforms = BTreeSet::new();
        for segment in raw.split(',') {
            if segment.trim().is_empty() {
                return Err(PlatformDomainError::EmptyPlatformSegment(raw.to_owned()));
            }
            platforms.insert(Platform::try_from(segment)?);
        }
        Ok(Self(platforms))
    }

    /// Builds a set from already-typed platforms.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformDomainError::EmptyPlatformSet`] when no platform is
    /// supplied.
    pub fn from_platforms(
        platforms: impl IntoIterator<Item = Platform>,
    ) -> Result<Self, PlatformDomainError> {
        let set: BTreeSet<Platform> = platforms.into_iter().collect();
        if set.is_empty() {
            return Err(PlatformDomainError::EmptyPlatformSet);
        }
        Ok(Self(set))
    }

    /// Returns `true` when the platform is targeted.
    #[must_use]
    pub fn contains(&self, platform: Platform) -> bool {
        self.0.contains(&platform)
    }

    /// Returns the number of targeted platforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no platform is targeted.
    ///
    /// Sets built through [`PlatformSet::parse`] or
    /// [`PlatformSet::from_platforms`] are never empty; the check exists for
    /// callers that validate persisted data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over platforms in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for PlatformSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for platform in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(platform.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PlatformSet {
    type Item = Platform;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Platform>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl Serialize for PlatformSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlatformSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
