// ABOUTME: Recommendations driven by band size, instrumentation, experience spread, and attendance
// ABOUTME: Emits BAND_ prefixed candidates for networking and skill development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::Duration;
use stagecraft_core::models::{BandMember, MusicianProfile};
use std::collections::BTreeSet;
use std::iter;

use super::{GeneratorInput, RecommendationGenerator};
use crate::benchmarks::genre_instrumentation;
use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};

/// Players, the user included, below which the lineup is thin
const MIN_BAND_SIZE: usize = 3;

/// Years of experience separating mentor from mentee
const EXPERIENCE_GAP_YEARS: f64 = 5.0;

/// Days without a rehearsal before one is suggested
const REHEARSAL_WINDOW_DAYS: i64 = 30;

/// Shows with attendance recorded before absences are judged
const LINEUP_MIN_TRACKED_SHOWS: usize = 4;

/// Attendance share below which a member counts as unreliable
const LINEUP_MIN_ATTENDANCE: f64 = 0.5;

/// Instrument keywords that make up a rhythm section
const BASS_KEYWORDS: [&str; 2] = ["bass", "upright"];
const DRUM_KEYWORDS: [&str; 3] = ["drum", "percussion", "cajon"];

/// Band-composition recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct BandGenerator;

impl RecommendationGenerator for BandGenerator {
    fn name(&self) -> &'static str {
        "band"
    }

    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate> {
        let profile = input.profile;
        let members = &profile.band_members;
        if members.is_empty() {
            return Vec::new();
        }

        let instruments = lineup_instruments(profile);
        let mut recommendations = Vec::new();

        if members.len() + 1 < MIN_BAND_SIZE {
            recommendations.push(RecommendationCandidate::new(
                "BAND_EXPAND",
                "Add another player",
                "A duo is easy to book but limits your sound. Try out a third player for \
                 a few rehearsals before committing.",
                RecommendationCategory::Networking,
                RecommendationPriority::Medium,
            ));
        }

        let has_bass = plays_any(&instruments, &BASS_KEYWORDS);
        let has_drums = plays_any(&instruments, &DRUM_KEYWORDS);
        if !has_bass || !has_drums {
            let missing = match (has_bass, has_drums) {
                (false, false) => "bass and drums",
                (false, true) => "bass",
                _ => "drums",
            };
            recommendations.push(RecommendationCandidate::new(
                "BAND_RHYTHM_SECTION",
                "Complete your rhythm section",
                format!(
                    "Your lineup has no {missing}. Ask at local jams or music schools for \
                     a player who can sit in."
                ),
                RecommendationCategory::Networking,
                RecommendationPriority::Medium,
            ));
        }

        if let Some((genre, missing)) = genre_gaps(profile, &instruments) {
            recommendations.push(RecommendationCandidate::new(
                "BAND_GENRE_FIT",
                "Match your lineup to your genre",
                format!(
                    "Typical {genre} lineups include {}. Consider a guest player for \
                     recordings and key shows.",
                    missing.join(", ")
                ),
                RecommendationCategory::Networking,
                RecommendationPriority::Low,
            ));
        }

        let most_experienced = members
            .iter()
            .map(|member| member.years_experience)
            .fold(f64::MIN, f64::max);
        let years = profile.years_of_experience;

        if years - most_experienced >= EXPERIENCE_GAP_YEARS {
            recommendations.push(RecommendationCandidate::new(
                "BAND_MENTORSHIP",
                "Mentor your bandmates",
                "You have years more experience than the rest of the band. Short \
                 sectionals on groove and dynamics lift the whole group.",
                RecommendationCategory::Skill,
                RecommendationPriority::Low,
            ));
        } else if most_experienced - years >= EXPERIENCE_GAP_YEARS {
            recommendations.push(RecommendationCandidate::new(
                "BAND_LEARN_FROM",
                "Learn from experienced bandmates",
                "Someone in your band has years more experience. Ask them to review your \
                 parts and share how they prepare for shows.",
                RecommendationCategory::Skill,
                RecommendationPriority::Low,
            ));
        }

        let rehearsal_cutoff = input.now - Duration::days(REHEARSAL_WINDOW_DAYS);
        let rehearsed_recently = profile
            .practice_log
            .iter()
            .any(|session| session.is_rehearsal() && session.date >= rehearsal_cutoff);
        if !rehearsed_recently {
            recommendations.push(RecommendationCandidate::new(
                "BAND_REHEARSAL",
                "Schedule a full-band rehearsal",
                "The band has not rehearsed together in a month. Book a regular slot \
                 so new material and transitions stay tight.",
                RecommendationCategory::Skill,
                RecommendationPriority::Medium,
            ));
        }

        if let Some(member) = unreliable_member(profile) {
            recommendations.push(RecommendationCandidate::new(
                "BAND_LINEUP_CHECK",
                "Sort out lineup availability",
                format!(
                    "{} missed more than half of your recent shows. Talk about \
                     commitments or line up a dependable sub.",
                    member.name
                ),
                RecommendationCategory::Networking,
                RecommendationPriority::Low,
            ));
        }

        recommendations
    }
}

/// Lower-cased instruments of the user and every member
fn lineup_instruments(profile: &MusicianProfile) -> BTreeSet<String> {
    iter::once(&profile.instrument)
        .chain(profile.band_members.iter().map(|member| &member.instrument))
        .map(|instrument| instrument.trim().to_lowercase())
        .filter(|instrument| !instrument.is_empty())
        .collect()
}

fn plays_any(instruments: &BTreeSet<String>, keywords: &[&str]) -> bool {
    instruments
        .iter()
        .any(|instrument| keywords.iter().any(|keyword| instrument.contains(keyword)))
}

/// First listed genre with known instrumentation that the lineup does not cover
fn genre_gaps(
    profile: &MusicianProfile,
    instruments: &BTreeSet<String>,
) -> Option<(String, Vec<&'static str>)> {
    profile.genres.iter().find_map(|genre| {
        let missing: Vec<&'static str> = genre_instrumentation(genre)
            .iter()
            .copied()
            .filter(|core| !instruments.iter().any(|played| played.contains(core)))
            .collect();
        (!missing.is_empty()).then(|| (genre.trim().to_lowercase(), missing))
    })
}

/// A member who missed most shows where attendance was recorded
fn unreliable_member(profile: &MusicianProfile) -> Option<&BandMember> {
    let tracked: Vec<&Vec<String>> = profile
        .shows
        .iter()
        .map(|show| &show.present_band_member_ids)
        .filter(|present| !present.is_empty())
        .collect();
    if tracked.len() < LINEUP_MIN_TRACKED_SHOWS {
        return None;
    }

    profile.band_members.iter().find(|member| {
        let attended = tracked
            .iter()
            .filter(|present| present.contains(&member.id))
            .count();
        (attended as f64 / tracked.len() as f64) < LINEUP_MIN_ATTENDANCE
    })
}
