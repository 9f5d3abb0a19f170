// ABOUTME: Recommendations driven by recording costs, revenue, plays, and catalog age
// ABOUTME: Emits REC_ prefixed candidates tagged as recording work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::Duration;
use stagecraft_core::models::RecordedSong;

use super::{GeneratorInput, RecommendationGenerator};
use crate::benchmarks::{self, recording};
use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};
use crate::tags::RelevanceTags;

/// Songs needed before one can stand out from the rest
const STANDOUT_MIN_SONGS: usize = 3;

/// Recording-economics recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingGenerator;

impl RecommendationGenerator for RecordingGenerator {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate> {
        let recordings = &input.profile.recordings;
        if recordings.is_empty() {
            return Vec::new();
        }

        let summary = input.summary;
        let mut recommendations = Vec::new();

        if summary.total_recording_cost > 0.0
            && summary.total_recording_revenue < summary.total_recording_cost
        {
            recommendations.push(rec(
                "REC_ROI_NEGATIVE",
                "Earn back your studio costs",
                format!(
                    "Your recordings cost {:.0} and have earned {:.0}. Sell downloads at \
                     shows and pitch tracks to playlists before booking more studio time.",
                    summary.total_recording_cost, summary.total_recording_revenue
                ),
                RecommendationCategory::Marketing,
                RecommendationPriority::High,
            ));
        }

        let songs: Vec<&RecordedSong> = recordings
            .iter()
            .flat_map(|session| session.songs.iter())
            .collect();
        let plays_per_song = if songs.is_empty() {
            0.0
        } else {
            summary.total_plays as f64 / songs.len() as f64
        };

        if !songs.is_empty() && plays_per_song < recording::MIN_PLAYS_PER_SONG {
            recommendations.push(rec(
                "REC_PROMOTE",
                "Get your recordings heard",
                format!(
                    "Your songs average {plays_per_song:.0} plays. Share one track a week \
                     and play the recorded versions live so fans look them up."
                ),
                RecommendationCategory::Marketing,
                RecommendationPriority::Medium,
            ));
        }

        let latest = recordings.iter().map(|session| session.date).max();
        if latest.is_some_and(|date| {
            input.now - date > Duration::days(recording::STALE_CATALOG_DAYS)
        }) {
            recommendations.push(rec(
                "REC_NEW_MATERIAL",
                "Record new material",
                "Your last session was over a year ago. Demo the strongest songs from \
                 your current set so your catalog reflects how you sound now.",
                RecommendationCategory::Skill,
                RecommendationPriority::Medium,
            ));
        }

        let standout = (songs.len() >= STANDOUT_MIN_SONGS && plays_per_song > 0.0)
            .then(|| songs.iter().max_by_key(|song| song.plays))
            .flatten()
            .filter(|song| {
                song.plays as f64 >= plays_per_song * recording::STANDOUT_PLAYS_MULTIPLE
            });
        if let Some(standout) = standout {
            recommendations.push(rec(
                "REC_SINGLE_FOCUS",
                "Push your standout track",
                format!(
                    "\"{}\" has far more plays than your other songs. Give it a video, a \
                     playlist pitch, and a spot in every set.",
                    standout.title
                ),
                RecommendationCategory::Marketing,
                RecommendationPriority::Low,
            ));
        }

        if !songs.is_empty() {
            let cost_per_song = summary.total_recording_cost / songs.len() as f64;
            let norm = benchmarks::recording_cost_per_song(input.context.career_stage);
            if cost_per_song > norm * recording::EXPENSIVE_COST_MULTIPLE {
                recommendations.push(rec(
                    "REC_COST_PER_SONG",
                    "Bring recording costs down",
                    format!(
                        "You spend about {cost_per_song:.0} per finished song, well above \
                         the typical {norm:.0}. Rehearse parts before the session and \
                         track several songs per day."
                    ),
                    RecommendationCategory::Skill,
                    RecommendationPriority::Low,
                ));
            }
        }

        recommendations
    }
}

fn rec(
    id: &str,
    title: &str,
    description: impl Into<String>,
    category: RecommendationCategory,
    priority: RecommendationPriority,
) -> RecommendationCandidate {
    RecommendationCandidate::new(id, title, description, category, priority)
        .tagged(RelevanceTags::RECORDING)
}
