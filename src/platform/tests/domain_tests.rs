//! Tests for platform identifiers and platform-set parsing.

use crate::platform::domain::{ExternalPostId, Platform, PlatformDomainError, PlatformSet};
use rstest::rstest;

#[rstest]
#[case("tiktok", Platform::Tiktok)]
#[case("  Xiaohongshu ", Platform::Xiaohongshu)]
#[case("BILIBILI", Platform::Bilibili)]
#[case("kuaishou", Platform::Kuaishou)]
#[case("zhihu", Platform::Zhihu)]
#[case("toutiao", Platform::Toutiao)]
fn platform_parses_case_insensitively(#[case] raw: &str, #[case] expected: Platform) {
    assert_eq!(Platform::try_from(raw), Ok(expected));
}

#[rstest]
fn platform_rejects_unknown_identifier() {
    assert_eq!(
        Platform::try_from("weibo"),
        Err(PlatformDomainError::UnknownPlatform("weibo".to_owned()))
    );
}

#[rstest]
fn platform_round_trips_through_canonical_string() {
    for platform in Platform::ALL {
        assert_eq!(Platform::try_from(platform.as_str()), Ok(platform));
    }
}

#[rstest]
#[case("tiktok", "tiktok", 1)]
#[case("bilibili,tiktok", "tiktok,bilibili", 2)]
#[case(" zhihu , toutiao ", "zhihu,toutiao", 2)]
#[case("tiktok,TikTok,tiktok", "tiktok", 1)]
#[case(
    "toutiao,zhihu,kuaishou,bilibili,xiaohongshu,tiktok",
    "tiktok,xiaohongshu,bilibili,kuaishou,zhihu,toutiao",
    6
)]
fn platform_set_normalises_boundary_string(
    #[case] raw: &str,
    #[case] canonical: &str,
    #[case] len: usize,
) {
    let set = PlatformSet::parse(raw).expect("valid platform set");

    assert_eq!(set.to_string(), canonical);
    assert_eq!(set.len(), len);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("tiktok,,zhihu")]
#[case("tiktok,")]
#[case(",tiktok")]
fn platform_set_rejects_empty_segments(#[case] raw: &str) {
    assert_eq!(
        PlatformSet::parse(raw),
        Err(PlatformDomainError::EmptyPlatformSegment(raw.to_owned()))
    );
}

#[rstest]
fn platform_set_rejects_unknown_platform() {
    assert!(matches!(
        PlatformSet::parse("tiktok,myspace"),
        Err(PlatformDomainError::UnknownPlatform(name)) if name == "myspace"
    ));
}

#[rstest]
fn platform_set_from_platforms_requires_one() {
    assert_eq!(
        PlatformSet::from_platforms(std::iter::empty()),
        Err(PlatformDomainError::EmptyPlatformSet)
    );
}

#[rstest]
fn platform_set_serializes_as_comma_joined_string() {
    let set = PlatformSet::from_platforms([Platform::Zhihu, Platform::Tiktok])
        .expect("valid platform set");

    let json = serde_json::to_string(&set).expect("serializable");
    assert_eq!(json, "\"tiktok,zhihu\"");
    let decoded: PlatformSet = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(decoded, set);
    assert!(serde_json::from_str::<PlatformSet>("\"tiktok,,\"").is_err());
}

#[rstest]
#[case("")]
#[case("   ")]
fn external_post_id_must_not_be_blank(#[case] raw: &str) {
    assert_eq!(
        ExternalPostId::new(raw),
        Err(PlatformDomainError::EmptyExternalPostId)
    );
}
