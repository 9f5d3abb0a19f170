// ABOUTME: Tests for the dynamic per-domain recommendation generators
// ABOUTME: Each generator is run alone against fixed-date profiles built to hit its triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{
    days_before, december, evenly_spaced_practice, evenly_spaced_shows, generate,
    gigging_profile, goal, ids, july, member, off_season, practice, recording, set_list, show,
};
use stagecraft_core::models::{GoalStatus, GoalType, MusicianProfile, VenueType};
use stagecraft_intelligence::generators::{
    AdvancedGenerator, BandGenerator, GoalGenerator, IndustryBenchmarkGenerator,
    PerformanceGenerator, PracticeGenerator, RecordingGenerator, SetListGenerator,
};
use stagecraft_intelligence::{
    default_generators, RecommendationCategory, RecommendationPriority, RelevanceTags,
};

#[test]
fn test_default_generators_run_in_fixed_order() {
    let names: Vec<&str> = default_generators()
        .iter()
        .map(|generator| generator.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "performance",
            "practice",
            "goals",
            "recording",
            "band",
            "setlist",
            "industry",
            "advanced"
        ]
    );
}

#[test]
fn test_generators_are_silent_without_data() {
    let profile = MusicianProfile::default();
    for generator in default_generators() {
        assert!(
            generate(generator.as_ref(), &profile, off_season()).is_empty(),
            "{} produced candidates for an empty profile",
            generator.name()
        );
    }
}

#[test]
fn test_generator_ids_carry_their_domain_prefix() {
    let now = december();
    let profile = gigging_profile(now);
    let prefixes: [(&str, &[&str]); 8] = [
        ("performance", &["PERF_", "VENUE_"]),
        ("practice", &["PRACTICE_", "SKILL_"]),
        ("goals", &["GOAL_"]),
        ("recording", &["REC_"]),
        ("band", &["BAND_"]),
        ("setlist", &["SETLIST_"]),
        ("industry", &["BENCH_"]),
        ("advanced", &["ADV_"]),
    ];

    for (generator, (name, allowed)) in default_generators().iter().zip(prefixes) {
        assert_eq!(generator.name(), name);
        for candidate in generate(generator.as_ref(), &profile, now) {
            assert!(
                allowed.iter().any(|prefix| candidate.id().starts_with(prefix)),
                "{name} emitted {}",
                candidate.id()
            );
        }
    }
}

#[test]
fn test_performance_small_unpaid_bar_circuit() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.shows = evenly_spaced_shows(now, 6, 7, VenueType::Bar, 10, 0.0);

    let candidates = generate(&PerformanceGenerator, &profile, now);
    assert_eq!(
        ids(&candidates),
        vec![
            "VENUE_STEP_UP",
            "PERF_AUDIENCE_BUILD",
            "VENUE_VARIETY",
            "PERF_UNPAID_SHOWS"
        ]
    );
    assert!(candidates
        .iter()
        .all(|candidate| candidate.tags == RelevanceTags::PERFORMANCE_INTENSIVE));
    assert!(candidates[3]
        .recommendation
        .description
        .starts_with("6 of your 6 shows"));
}

fn expected_tags(id: &str) -> RelevanceTags {
    let mut tags = RelevanceTags::empty();
    if id.contains("PRACTICE") || id.contains("SKILL") {
        tags |= RelevanceTags::SKILL_INTENSIVE;
    }
    if id.contains("PERF") || id.contains("VENUE") {
        tags |= RelevanceTags::PERFORMANCE_INTENSIVE;
    }
    if id.contains("REV_OPT") || id.contains("BUSINESS") {
        tags |= RelevanceTags::REVENUE_FOCUSED;
    }
    if id.contains("SKILL_01") || id.contains("PERF_01") {
        tags |= RelevanceTags::FOUNDATIONAL;
    }
    if id.contains("REC_") {
        tags |= RelevanceTags::RECORDING;
    }
    if id == "ADV_SEASONAL_HOLIDAY" {
        tags |= RelevanceTags::HOLIDAY_SEASON;
    }
    if id == "ADV_SEASONAL_SUMMER" {
        tags |= RelevanceTags::SUMMER_SEASON;
    }
    tags
}

#[test]
fn test_generated_tags_follow_id_families() {
    let mut seen = RelevanceTags::empty();
    for now in [december(), july(), off_season()] {
        let mut profile = gigging_profile(now);
        profile.practice_log = evenly_spaced_practice(now, 4, 9, 20);

        let mut recorded = gigging_profile(now);
        recorded.recordings = vec![recording(
            days_before(now, 400),
            2_000.0,
            &[("One", 400, 1.0), ("Two", 0, 0.0), ("Three", 0, 0.0), ("Four", 0, 0.0)],
        )];

        for profile in [&profile, &recorded] {
            for generator in default_generators() {
                for candidate in generate(generator.as_ref(), profile, now) {
                    assert_eq!(
                        candidate.tags,
                        expected_tags(candidate.id()),
                        "{} from {}",
                        candidate.id(),
                        generator.name()
                    );
                    seen |= candidate.tags;
                }
            }
        }
    }

    // Every generated facet was exercised at least once
    for tag in [
        RelevanceTags::SKILL_INTENSIVE,
        RelevanceTags::PERFORMANCE_INTENSIVE,
        RelevanceTags::REVENUE_FOCUSED,
        RelevanceTags::RECORDING,
        RelevanceTags::HOLIDAY_SEASON,
    ] {
        assert!(seen.contains(tag), "no candidate carried {tag:?}");
    }
}

#[test]
fn test_performance_steady_odd_schedule_is_not_declining() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.shows = evenly_spaced_shows(now, 5, 7, VenueType::ConcertHall, 80, 300.0);

    let candidates = generate(&PerformanceGenerator, &profile, now);
    assert!(!ids(&candidates).contains(&"PERF_FREQ_DECLINING"));
}

#[test]
fn test_performance_declining_schedule_is_urgent() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.shows = [75, 70, 65, 45, 15, 0]
        .into_iter()
        .map(|days| show(days_before(now, days), VenueType::ConcertHall, 80, 300.0))
        .collect();

    let candidates = generate(&PerformanceGenerator, &profile, now);
    let declining = candidates
        .iter()
        .find(|candidate| candidate.id() == "PERF_FREQ_DECLINING")
        .unwrap();
    assert_eq!(
        declining.recommendation.priority,
        RecommendationPriority::High
    );
    // Paid shows at a mid-tier venue with a healthy crowd
    assert!(!ids(&candidates).contains(&"PERF_UNPAID_SHOWS"));
    assert!(!ids(&candidates).contains(&"VENUE_STEP_UP"));
    assert!(!ids(&candidates).contains(&"PERF_AUDIENCE_BUILD"));
}

#[test]
fn test_practice_sparse_sessions() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.practice_log = evenly_spaced_practice(now, 5, 10, 30);

    let candidates = generate(&PracticeGenerator, &profile, now);
    assert_eq!(
        ids(&candidates),
        vec!["PRACTICE_CONSISTENCY", "PRACTICE_MORE_TIME"]
    );
    assert_eq!(
        candidates[0].recommendation.priority,
        RecommendationPriority::High
    );
    assert!(candidates.iter().all(|candidate| {
        candidate.recommendation.category == RecommendationCategory::Skill
            && candidate.tags == RelevanceTags::SKILL_INTENSIVE
    }));
}

#[test]
fn test_practice_set_preparation_for_gigging_musicians() {
    let now = off_season();
    let mut profile = gigging_profile(now);

    let candidates = generate(&PracticeGenerator, &profile, now);
    assert!(ids(&candidates).contains(&"PRACTICE_SET_PREP"));
    // Twenty sessions with no skills logged
    assert!(ids(&candidates).contains(&"SKILL_LESSONS"));

    profile.practice_log[0].focus_areas = vec!["Stage presence".to_owned()];
    let candidates = generate(&PracticeGenerator, &profile, now);
    assert!(!ids(&candidates).contains(&"PRACTICE_SET_PREP"));
}

#[test]
fn test_goals_without_active_goal_only_suggest_a_new_one() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    let mut done = goal("g1", GoalType::Performance, days_before(now, 200));
    done.status = GoalStatus::Completed;
    let mut paused = goal("g2", GoalType::Financial, days_before(now, 200));
    paused.status = GoalStatus::Paused;
    profile.goals = vec![done, paused];

    let candidates = generate(&GoalGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["GOAL_SET_NEW"]);
}

#[test]
fn test_goals_overdue_and_unlinked() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    let mut late = goal("g1", GoalType::Performance, days_before(now, 30));
    late.target_value = Some(10.0);
    late.current_value = 2.0;
    late.deadline = Some(days_before(now, 5));
    profile.goals = vec![late];

    let candidates = generate(&GoalGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["GOAL_OVERDUE", "GOAL_LINK_ACTIVITY"]);

    let overdue = &candidates[0].recommendation;
    assert_eq!(overdue.priority, RecommendationPriority::High);
    assert_eq!(overdue.category, RecommendationCategory::Performance);
    assert!(overdue.description.contains("\"Goal g1\""));
}

#[test]
fn test_goals_deadline_near() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    let mut soon = goal("g1", GoalType::Skill, days_before(now, 20));
    soon.target_value = Some(10.0);
    soon.current_value = 5.0;
    soon.deadline = Some(now + Duration::days(7));
    soon.auto_update = true;
    profile.goals = vec![soon.clone()];

    let candidates = generate(&GoalGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["GOAL_DEADLINE_NEAR"]);

    // Three-quarters done is no longer at risk
    soon.current_value = 7.5;
    profile.goals = vec![soon];
    assert!(generate(&GoalGenerator, &profile, now).is_empty());
}

#[test]
fn test_goals_stalled_and_financial() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    let stalled = goal("g1", GoalType::Performance, days_before(now, 90));
    let mut income = goal("g2", GoalType::Financial, days_before(now, 10));
    income.target_value = Some(1000.0);
    income.current_value = 100.0;
    income.auto_update = true;
    profile.goals = vec![stalled, income];

    let candidates = generate(&GoalGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["GOAL_STALLED", "GOAL_FINANCIAL_TARGET"]);
    assert_eq!(
        candidates[1].recommendation.category,
        RecommendationCategory::Marketing
    );
}

#[test]
fn test_goals_too_many_active() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.goals = (0..6)
        .map(|i| goal(&format!("g{i}"), GoalType::Skill, days_before(now, 5)))
        .collect();

    let candidates = generate(&GoalGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["GOAL_FOCUS"]);
    assert!(candidates[0].recommendation.description.contains("6 active goals"));
}

#[test]
fn test_recording_economics() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.recordings = vec![recording(
        days_before(now, 400),
        900.0,
        &[
            ("Breakout", 400, 1.0),
            ("Deep Cut", 10, 0.0),
            ("B-Side", 5, 0.0),
            ("Outro", 5, 0.0),
        ],
    )];

    let candidates = generate(&RecordingGenerator, &profile, now);
    assert_eq!(
        ids(&candidates),
        vec![
            "REC_ROI_NEGATIVE",
            "REC_NEW_MATERIAL",
            "REC_SINGLE_FOCUS",
            "REC_COST_PER_SONG"
        ]
    );
    assert!(candidates
        .iter()
        .all(|candidate| candidate.tags == RelevanceTags::RECORDING));
    assert!(candidates[2].recommendation.description.contains("\"Breakout\""));
}

#[test]
fn test_recording_with_few_plays_needs_promotion() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.recordings = vec![recording(days_before(now, 20), 0.0, &[("Demo", 10, 0.0)])];

    let candidates = generate(&RecordingGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["REC_PROMOTE"]);
}

#[test]
fn test_band_duo_without_rhythm_section() {
    let now = off_season();
    let mut profile = MusicianProfile::new("u1", "Guitar");
    profile.years_of_experience = 10.0;
    profile.band_members = vec![member("m1", "Vocals", 2.0, days_before(now, 100))];

    let candidates = generate(&BandGenerator, &profile, now);
    assert_eq!(
        ids(&candidates),
        vec![
            "BAND_EXPAND",
            "BAND_RHYTHM_SECTION",
            "BAND_MENTORSHIP",
            "BAND_REHEARSAL"
        ]
    );
    assert!(candidates[1]
        .recommendation
        .description
        .contains("no bass and drums"));
}

#[test]
fn test_band_genre_experience_and_attendance() {
    let now = off_season();
    let mut profile = MusicianProfile::new("u1", "Guitar");
    profile.years_of_experience = 3.0;
    profile.genres = vec!["Jazz".to_owned()];
    profile.band_members = vec![
        member("m1", "Upright Bass", 9.0, days_before(now, 300)),
        member("m2", "Drums", 3.0, days_before(now, 300)),
    ];

    let mut rehearsal = practice(days_before(now, 5), 120, &[]);
    rehearsal.present_band_member_ids = vec!["m1".to_owned(), "m2".to_owned()];
    profile.practice_log = vec![rehearsal];

    profile.shows = (1..=4)
        .map(|week| {
            let mut gig = show(days_before(now, week * 7), VenueType::Bar, 40, 150.0);
            gig.present_band_member_ids = vec!["m1".to_owned()];
            gig
        })
        .collect();

    let candidates = generate(&BandGenerator, &profile, now);
    assert_eq!(
        ids(&candidates),
        vec!["BAND_GENRE_FIT", "BAND_LEARN_FROM", "BAND_LINEUP_CHECK"]
    );
    assert!(candidates[0]
        .recommendation
        .description
        .contains("piano, saxophone"));
    assert!(candidates[2]
        .recommendation
        .description
        .starts_with("Member m2"));
}

#[test]
fn test_setlist_short_covers_set_played_to_death() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.set_lists = vec![set_list("s1", days_before(now, 100), &[(4.0, false); 5])];
    profile.shows = (0..10)
        .map(|week| {
            let mut gig = show(days_before(now, week * 7), VenueType::Bar, 30, 100.0);
            gig.setlist_id = Some("s1".to_owned());
            gig
        })
        .collect();

    let candidates = generate(&SetListGenerator, &profile, now);
    assert_eq!(
        ids(&candidates),
        vec!["SETLIST_EXTEND", "SETLIST_ORIGINALS", "SETLIST_REFRESH"]
    );
}

#[test]
fn test_setlist_rotation() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    let mut long_set = vec![(4.0, true); 6];
    long_set.extend([(4.0, false); 6]);
    profile.set_lists = vec![
        set_list("s1", days_before(now, 200), &[(5.0, false); 10]),
        set_list("s2", days_before(now, 20), &long_set),
    ];
    profile.shows = (0..5)
        .map(|week| {
            let mut gig = show(days_before(now, week * 7), VenueType::Bar, 30, 100.0);
            gig.setlist_id = Some("s1".to_owned());
            gig
        })
        .collect();

    let candidates = generate(&SetListGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["SETLIST_ROTATE"]);
}

#[test]
fn test_setlist_untracked_shows() {
    let now = off_season();
    let profile = gigging_profile(now);

    let candidates = generate(&SetListGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["SETLIST_EXTEND", "SETLIST_TRACK"]);
}

#[test]
fn test_industry_underpaid_small_crowds() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.shows = vec![
        show(days_before(now, 60), VenueType::Bar, 5, 20.0),
        show(now, VenueType::Bar, 5, 20.0),
    ];

    let candidates = generate(&IndustryBenchmarkGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["BENCH_FEE_BAR", "BENCH_AUDIENCE"]);

    let fee = &candidates[0].recommendation;
    assert_eq!(fee.priority, RecommendationPriority::High);
    assert_eq!(fee.category, RecommendationCategory::Marketing);
    assert_eq!(fee.title, "Raise your bar fee");
}

#[test]
fn test_industry_single_show_per_venue_is_not_compared() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.shows = vec![
        show(days_before(now, 60), VenueType::Bar, 30, 1.0),
        show(now, VenueType::Restaurant, 30, 1.0),
    ];

    let candidates = generate(&IndustryBenchmarkGenerator, &profile, now);
    assert!(candidates
        .iter()
        .all(|candidate| !candidate.id().starts_with("BENCH_FEE_")));
}

#[test]
fn test_industry_slow_show_rate() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.shows = vec![
        show(days_before(now, 300), VenueType::Bar, 30, 100.0),
        show(now, VenueType::Bar, 30, 100.0),
    ];

    let candidates = generate(&IndustryBenchmarkGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["BENCH_SHOW_FREQUENCY"]);
}

#[test]
fn test_industry_practice_below_stage_norm() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.practice_log = evenly_spaced_practice(now, 7, 1, 10);

    let candidates = generate(&IndustryBenchmarkGenerator, &profile, now);
    assert_eq!(ids(&candidates), vec!["BENCH_PRACTICE"]);
    assert_eq!(candidates[0].tags, RelevanceTags::SKILL_INTENSIVE);
}

#[test]
fn test_advanced_working_musician() {
    let now = off_season();
    let profile = gigging_profile(now);

    let candidates = generate(&AdvancedGenerator, &profile, now);
    assert_eq!(
        ids(&candidates),
        vec![
            "ADV_REV_OPT_MERCH",
            "ADV_REV_OPT_STREAMING",
            "ADV_REV_OPT_PRIVATE",
            "ADV_CREATIVE_SONGWRITING",
            "ADV_CREATIVE_GENRE",
            "ADV_BUSINESS_BRAND",
            "ADV_BUSINESS_PLANNING",
            "ADV_SEASONAL_HOLIDAY",
            "ADV_SEASONAL_SUMMER",
            "ADV_SKILL_TECHNIQUE"
        ]
    );

    let holiday = candidates
        .iter()
        .find(|candidate| candidate.id() == "ADV_SEASONAL_HOLIDAY")
        .unwrap();
    assert_eq!(holiday.tags, RelevanceTags::HOLIDAY_SEASON);
    let merch = &candidates[0];
    assert_eq!(merch.tags, RelevanceTags::REVENUE_FOCUSED);
}

#[test]
fn test_advanced_festival_act_with_big_crowds() {
    let now = off_season();
    let mut profile = MusicianProfile::default();
    profile.shows = evenly_spaced_shows(now, 3, 30, VenueType::Festival, 200, 500.0);

    let candidates = generate(&AdvancedGenerator, &profile, now);
    let ids = ids(&candidates);
    assert!(ids.contains(&"ADV_SEASONAL_HOLIDAY"));
    assert!(!ids.contains(&"ADV_SEASONAL_SUMMER"));
    assert!(ids.contains(&"ADV_AUDIENCE_CAPTURE"));
    // No practice log, so no technique advice
    assert!(!ids.contains(&"ADV_SKILL_TECHNIQUE"));
}
