// ABOUTME: Tests for the static rule catalog and profile fact extraction
// ABOUTME: Rule predicates, instrument interpolation, and the fallback top-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::onboarding_profile;
use stagecraft_core::models::{CrowdSize, MusicianProfile, PerformanceFrequency};
use stagecraft_intelligence::{
    ProfileFacts, RecommendationCandidate, RecommendationPriority, RelevanceTags, RuleCatalog,
};
use std::collections::HashSet;

fn matched_ids(profile: &MusicianProfile) -> Vec<String> {
    RuleCatalog::default()
        .evaluate(&ProfileFacts::from_profile(profile), 0)
        .iter()
        .map(|candidate| candidate.id().to_owned())
        .collect()
}

#[test]
fn test_catalog_ids_are_unique() {
    let catalog = RuleCatalog::default();
    assert_eq!(catalog.rules().len(), 12);

    let ids: HashSet<&str> = catalog.rules().iter().map(|rule| rule.id).collect();
    assert_eq!(ids.len(), 12);
    assert!(!ids.contains(catalog.fallback().id));
    assert_eq!(catalog.fallback().id, "GEN_01");
    assert_eq!(catalog.fallback().priority, RecommendationPriority::Low);
}

#[test]
fn test_facts_normalize_profile_fields() {
    let mut profile = onboarding_profile(
        "  Trumpet ",
        PerformanceFrequency::Weekly,
        CrowdSize::Large,
        4.0,
        &["Social", " MAILING"],
    );
    profile.id = "facts".to_owned();

    let facts = ProfileFacts::from_profile(&profile);
    assert_eq!(facts.instrument, "trumpet");
    assert_eq!(facts.crowd_code, 4);
    assert!(facts.uses("social"));
    assert!(facts.uses("mailing"));
    assert!(!facts.uses("website"));
    assert!(!facts.no_marketing);
}

#[test]
fn test_none_sentinel_means_no_marketing() {
    let profile = onboarding_profile(
        "Guitar",
        PerformanceFrequency::Never,
        CrowdSize::Tiny,
        1.0,
        &["none"],
    );
    assert!(ProfileFacts::from_profile(&profile).no_marketing);
    assert!(ProfileFacts::from_profile(&MusicianProfile::default()).no_marketing);
}

#[test]
fn test_rules_match_in_catalog_order() {
    let profile = onboarding_profile(
        "Guitar",
        PerformanceFrequency::Monthly,
        CrowdSize::Medium,
        6.0,
        &["social"],
    );

    // Monthly, 50-100 crowd, six years, social only
    assert_eq!(
        matched_ids(&profile),
        vec!["NET_01", "PERF_02", "MKT_02", "MKT_03", "SKILL_02", "MKT_04"]
    );
}

#[test]
fn test_regular_small_crowd_rules() {
    let profile = onboarding_profile(
        "Keys",
        PerformanceFrequency::Multiple,
        CrowdSize::Small,
        2.0,
        &["networking", "mailing"],
    );
    assert_eq!(matched_ids(&profile), vec!["PERF_03"]);
}

#[test]
fn test_experience_boundaries() {
    let at_two = onboarding_profile(
        "Cello",
        PerformanceFrequency::Yearly,
        CrowdSize::Tiny,
        2.0,
        &["networking"],
    );
    let ids = matched_ids(&at_two);
    assert!(ids.contains(&"PERF_01".to_owned()));
    assert!(!ids.contains(&"SKILL_01".to_owned()));

    let just_under = onboarding_profile(
        "Cello",
        PerformanceFrequency::Yearly,
        CrowdSize::Tiny,
        1.99,
        &["networking"],
    );
    let ids = matched_ids(&just_under);
    assert!(!ids.contains(&"PERF_01".to_owned()));
    assert!(ids.contains(&"SKILL_01".to_owned()));
}

#[test]
fn test_fallback_tops_up_below_minimum() {
    let catalog = RuleCatalog::default();
    let profile = onboarding_profile(
        "Violin",
        PerformanceFrequency::Yearly,
        CrowdSize::Tiny,
        1.0,
        &["networking"],
    );
    let facts = ProfileFacts::from_profile(&profile);

    let topped = catalog.evaluate(&facts, 3);
    let ids: Vec<&str> = topped.iter().map(RecommendationCandidate::id).collect();
    assert_eq!(ids, vec!["SKILL_01", "GEN_01"]);

    // At or above the minimum the fallback is left out
    let untouched = catalog.evaluate(&facts, 1);
    assert_eq!(untouched.len(), 1);
    assert_eq!(untouched[0].id(), "SKILL_01");
}

#[test]
fn test_instrument_interpolation() {
    let catalog = RuleCatalog::default();
    let profile = onboarding_profile(
        "Guitar",
        PerformanceFrequency::Never,
        CrowdSize::Tiny,
        0.5,
        &[],
    );
    let candidates = catalog.evaluate(&ProfileFacts::from_profile(&profile), 3);
    let social = candidates
        .iter()
        .find(|candidate| candidate.id() == "MKT_01")
        .unwrap();
    assert!(social.recommendation.description.contains("#guitarplayer"));
    assert!(candidates
        .iter()
        .all(|candidate| !candidate.recommendation.description.contains('{')));
}

#[test]
fn test_empty_instrument_renders_as_music() {
    let catalog = RuleCatalog::default();
    let facts = ProfileFacts::from_profile(&MusicianProfile::default());
    assert_eq!(facts.instrument_label(), "music");

    let fallback = catalog.fallback().render(&facts);
    assert!(fallback.recommendation.description.contains("music recommendations"));
}

#[test]
fn test_rule_tags_are_declared() {
    let catalog = RuleCatalog::default();
    let tags_of = |id: &str| {
        catalog
            .rules()
            .iter()
            .find(|rule| rule.id == id)
            .map(|rule| rule.tags)
            .unwrap()
    };

    assert!(tags_of("SKILL_01").contains(RelevanceTags::SKILL_INTENSIVE));
    assert!(tags_of("SKILL_01").contains(RelevanceTags::FOUNDATIONAL));
    assert!(tags_of("PERF_01").contains(RelevanceTags::PERFORMANCE_INTENSIVE));
    assert!(tags_of("MKT_01").is_empty());
}
