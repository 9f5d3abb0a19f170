// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Fixed evaluation dates and builders for profiles and activity records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::cast_possible_wrap
)]
//! Shared test fixtures for `stagecraft`
//!
//! Every test pins the evaluation instant so seasonal weighting and activity
//! windows are reproducible.

use chrono::{DateTime, Duration, TimeZone, Utc};
use stagecraft_core::models::{
    BandMember, CrowdSize, Goal, GoalType, MusicianProfile, PerformanceFrequency,
    PerformanceRecord, PracticeSession, RecordedSong, RecordingSession, SetList, SetListSong,
    VenueType,
};
use stagecraft_intelligence::{
    summarize_activity, GeneratorInput, RecommendationCandidate, RecommendationContext,
    RecommendationEngineConfig, RecommendationGenerator,
};

/// Mid-March: outside every seasonal window
pub fn off_season() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
}

/// Mid-December: holiday and recording seasons
pub fn december() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 10, 12, 0, 0).unwrap()
}

/// Mid-July: festival season
pub fn july() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 10, 12, 0, 0).unwrap()
}

pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Onboarding-only profile with no logged activity
pub fn onboarding_profile(
    instrument: &str,
    frequency: PerformanceFrequency,
    crowd: CrowdSize,
    years: f64,
    marketing: &[&str],
) -> MusicianProfile {
    let mut profile = MusicianProfile::new("test-user", instrument);
    profile.performance_frequency = frequency;
    profile.crowd_size = crowd;
    profile.years_of_experience = years;
    profile.marketing_efforts = marketing.iter().map(|m| (*m).to_owned()).collect();
    profile
}

pub fn show(
    date: DateTime<Utc>,
    venue_type: VenueType,
    audience_size: u32,
    payment: f64,
) -> PerformanceRecord {
    PerformanceRecord::new(date, venue_type, audience_size, 60, payment)
}

/// `count` shows, one every `spacing_days`, ending at `end`
pub fn evenly_spaced_shows(
    end: DateTime<Utc>,
    count: usize,
    spacing_days: i64,
    venue_type: VenueType,
    audience_size: u32,
    payment: f64,
) -> Vec<PerformanceRecord> {
    (0..count)
        .rev()
        .map(|i| {
            show(
                days_before(end, i as i64 * spacing_days),
                venue_type,
                audience_size,
                payment,
            )
        })
        .collect()
}

pub fn practice(date: DateTime<Utc>, minutes: u32, skills: &[&str]) -> PracticeSession {
    let mut session = PracticeSession::new(date, minutes);
    session.skills_worked_on = skills.iter().map(|s| (*s).to_owned()).collect();
    session
}

/// `count` sessions, one every `spacing_days`, ending at `end`
pub fn evenly_spaced_practice(
    end: DateTime<Utc>,
    count: usize,
    spacing_days: i64,
    minutes: u32,
) -> Vec<PracticeSession> {
    (0..count)
        .rev()
        .map(|i| PracticeSession::new(days_before(end, i as i64 * spacing_days), minutes))
        .collect()
}

pub fn recording(date: DateTime<Utc>, cost: f64, songs: &[(&str, u64, f64)]) -> RecordingSession {
    RecordingSession {
        date,
        location: "Studio B".to_owned(),
        cost,
        songs: songs
            .iter()
            .map(|(title, plays, revenue)| RecordedSong {
                title: (*title).to_owned(),
                plays: *plays,
                revenue: *revenue,
            })
            .collect(),
    }
}

pub fn member(id: &str, instrument: &str, years: f64, joined: DateTime<Utc>) -> BandMember {
    BandMember {
        id: id.to_owned(),
        name: format!("Member {id}"),
        instrument: instrument.to_owned(),
        years_experience: years,
        join_date: joined,
    }
}

pub fn set_list(
    id: &str,
    created_at: DateTime<Utc>,
    songs: &[(f64, bool)],
) -> SetList {
    SetList {
        id: id.to_owned(),
        name: format!("Set {id}"),
        songs: songs
            .iter()
            .enumerate()
            .map(|(i, (minutes, original))| SetListSong {
                title: format!("Song {i}"),
                duration_minutes: *minutes,
                is_original: *original,
            })
            .collect(),
        created_at,
    }
}

pub fn goal(id: &str, goal_type: GoalType, created_at: DateTime<Utc>) -> Goal {
    Goal::new(id, format!("Goal {id}"), goal_type, created_at)
}

/// A working musician with every collection populated
pub fn gigging_profile(now: DateTime<Utc>) -> MusicianProfile {
    let mut profile = onboarding_profile(
        "Guitar",
        PerformanceFrequency::Weekly,
        CrowdSize::Medium,
        6.0,
        &["social"],
    );
    profile.genres = vec!["Rock".to_owned()];
    profile.shows = evenly_spaced_shows(now, 12, 7, VenueType::Bar, 35, 80.0);
    profile.practice_log = evenly_spaced_practice(now, 20, 2, 45);
    profile.recordings = vec![recording(
        days_before(now, 200),
        900.0,
        &[("Open Road", 40, 2.0), ("Late Train", 25, 1.0)],
    )];
    profile.band_members = vec![member("m1", "Drums", 3.0, days_before(now, 400))];
    profile.set_lists = vec![set_list(
        "s1",
        days_before(now, 100),
        &[(4.0, false), (5.0, false), (3.5, true)],
    )];
    profile.goals = vec![goal("g1", GoalType::Performance, days_before(now, 30))];
    profile
}

/// Run one generator against a profile with the default thresholds
pub fn generate(
    generator: &dyn RecommendationGenerator,
    profile: &MusicianProfile,
    now: DateTime<Utc>,
) -> Vec<RecommendationCandidate> {
    let config = RecommendationEngineConfig::default();
    let summary = summarize_activity(profile);
    let context = RecommendationContext::build(profile, &summary, now, &config.thresholds);
    let input = GeneratorInput {
        profile,
        context: &context,
        summary: &summary,
        now,
    };
    generator.generate(&input)
}

pub fn ids(candidates: &[RecommendationCandidate]) -> Vec<&str> {
    candidates.iter().map(RecommendationCandidate::id).collect()
}
