// ABOUTME: Benchmark fixtures generating musician profiles of increasing history depth
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Benchmark fixtures for generating realistic musician histories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use stagecraft_core::models::{
    BandMember, CrowdSize, Goal, GoalType, MusicianProfile, PerformanceFrequency,
    PerformanceRecord, PracticeSession, RecordedSong, RecordingSession, SetList, SetListSong,
    VenueType,
};

/// Predefined history depths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few months of logging
    Small,
    /// A couple of years of logging
    Medium,
    /// A long career logged in full
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn shows(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Fixed evaluation instant so seasonal weighting is stable across runs
#[must_use]
pub fn bench_now() -> DateTime<Utc> {
    Utc.timestamp_opt(1_765_368_000, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Build a profile whose collections scale with `size`
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
#[must_use]
pub fn generate_profile(id: usize, size: HistorySize) -> MusicianProfile {
    let now = bench_now();
    let shows = size.shows();

    let mut profile = MusicianProfile::new(format!("bench_{id}"), "Guitar");
    profile.performance_frequency = PerformanceFrequency::Weekly;
    profile.crowd_size = CrowdSize::Medium;
    profile.years_of_experience = 2.0 + (id % 10) as f64;
    profile.marketing_efforts = vec!["social".to_owned()];
    profile.genres = vec!["Rock".to_owned()];

    profile.shows = (0..shows)
        .map(|index| {
            let venue = VenueType::ALL[(index + id) % VenueType::ALL.len()];
            let mut show = PerformanceRecord::new(
                now - Duration::days((index * 5) as i64),
                venue,
                20 + ((index * 17) % 150) as u32,
                60 + ((index * 7) % 60) as u32,
                ((index * 37) % 400) as f64,
            );
            if index % 3 == 0 {
                show.setlist_id = Some("main".to_owned());
                show.present_band_member_ids = vec!["m1".to_owned()];
            }
            show
        })
        .collect();

    profile.practice_log = (0..shows * 2)
        .map(|index| {
            let mut session = PracticeSession::new(
                now - Duration::days((index * 2) as i64),
                20 + ((index * 13) % 100) as u32,
            );
            session.skills_worked_on = vec![format!("skill_{}", index % 4)];
            session
        })
        .collect();

    profile.recordings = (0..(shows / 20).max(1))
        .map(|index| RecordingSession {
            date: now - Duration::days((index * 90) as i64),
            location: "Studio".to_owned(),
            cost: 500.0 + (index * 50) as f64,
            songs: (0..4)
                .map(|song| RecordedSong {
                    title: format!("Track {index}-{song}"),
                    plays: ((index + 1) * (song + 1) * 40) as u64,
                    revenue: (song + 1) as f64,
                })
                .collect(),
        })
        .collect();

    profile.band_members = vec![BandMember {
        id: "m1".to_owned(),
        name: "Drummer".to_owned(),
        instrument: "Drums".to_owned(),
        years_experience: 4.0,
        join_date: now - Duration::days(700),
    }];

    profile.set_lists = vec![SetList {
        id: "main".to_owned(),
        name: "Main set".to_owned(),
        songs: (0..10)
            .map(|song| SetListSong {
                title: format!("Song {song}"),
                duration_minutes: 4.5,
                is_original: song % 4 == 0,
            })
            .collect(),
        created_at: now - Duration::days(180),
    }];

    profile.goals = vec![
        Goal::new("g1", "Headline a festival", GoalType::Performance, now - Duration::days(90)),
        Goal::new("g2", "Earn 5k from music", GoalType::Financial, now - Duration::days(30)),
    ];

    profile
}

/// Generate `count` independent profiles of the same depth
#[must_use]
pub fn generate_profiles(count: usize, size: HistorySize) -> Vec<MusicianProfile> {
    (0..count).map(|id| generate_profile(id, size)).collect()
}
