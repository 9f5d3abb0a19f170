// ABOUTME: Recommendations driven by set length, original material share, and set reuse
// ABOUTME: Emits SETLIST_ prefixed candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use stagecraft_core::models::SetList;

use super::{GeneratorInput, RecommendationGenerator};
use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};

/// Minutes a headline set should be able to fill
const MIN_SET_MINUTES: f64 = 45.0;

/// Songs in a set before its original share is judged
const ORIGINALS_MIN_SONGS: usize = 5;

/// Original share below which more originals are suggested
const MIN_ORIGINAL_RATIO: f64 = 0.3;

/// Shows with the same set before it should be refreshed
const REFRESH_AFTER_SHOWS: usize = 10;

/// Shows with a recorded set before rotation is judged
const ROTATE_MIN_TRACKED_SHOWS: usize = 5;

/// Share of tracked shows played with one set that counts as over-reliance
const ROTATE_DOMINANT_SHARE: f64 = 0.8;

/// Shows logged before missing set tracking is pointed out
const TRACK_MIN_SHOWS: usize = 3;

/// Set-list recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct SetListGenerator;

impl RecommendationGenerator for SetListGenerator {
    fn name(&self) -> &'static str {
        "setlist"
    }

    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate> {
        let profile = input.profile;
        let set_lists = &profile.set_lists;
        let Some(latest) = set_lists.iter().max_by_key(|set| set.created_at) else {
            return Vec::new();
        };

        let mut recommendations = Vec::new();

        let longest = set_lists
            .iter()
            .map(SetList::total_duration_minutes)
            .fold(0.0, f64::max);
        if longest < MIN_SET_MINUTES {
            recommendations.push(RecommendationCandidate::new(
                "SETLIST_EXTEND",
                "Build a full-length set",
                format!(
                    "Your longest set runs {longest:.0} minutes. Venues often want 45 \
                     minutes or more; add a few songs you can play reliably."
                ),
                RecommendationCategory::Performance,
                RecommendationPriority::Medium,
            ));
        }

        if latest.songs.len() >= ORIGINALS_MIN_SONGS
            && latest.original_ratio() < MIN_ORIGINAL_RATIO
        {
            recommendations.push(RecommendationCandidate::new(
                "SETLIST_ORIGINALS",
                "Work more originals into your set",
                format!(
                    "\"{}\" is mostly covers. Originals make you memorable and open up \
                     original-music venues.",
                    latest.name
                ),
                RecommendationCategory::Skill,
                RecommendationPriority::Low,
            ));
        }

        let uses_of = |set: &SetList| {
            profile
                .shows
                .iter()
                .filter(|show| show.setlist_id.as_deref() == Some(set.id.as_str()))
                .count()
        };

        let latest_uses = uses_of(latest);
        if latest_uses >= REFRESH_AFTER_SHOWS {
            recommendations.push(RecommendationCandidate::new(
                "SETLIST_REFRESH",
                "Refresh your set",
                format!(
                    "You have played \"{}\" at {latest_uses} shows. Swap in new songs so \
                     returning fans hear something different.",
                    latest.name
                ),
                RecommendationCategory::Performance,
                RecommendationPriority::Medium,
            ));
        }

        let tracked = profile
            .shows
            .iter()
            .filter(|show| show.setlist_id.is_some())
            .count();
        if set_lists.len() > 1 && tracked >= ROTATE_MIN_TRACKED_SHOWS {
            let dominant = set_lists.iter().map(uses_of).max().unwrap_or(0);
            if dominant as f64 / tracked as f64 >= ROTATE_DOMINANT_SHARE {
                recommendations.push(RecommendationCandidate::new(
                    "SETLIST_ROTATE",
                    "Rotate between your sets",
                    "You keep returning to the same set even though you have others. \
                     Match the set to the room and rotate for repeat venues.",
                    RecommendationCategory::Performance,
                    RecommendationPriority::Low,
                ));
            }
        }

        if profile.shows.len() >= TRACK_MIN_SHOWS && tracked == 0 {
            recommendations.push(RecommendationCandidate::new(
                "SETLIST_TRACK",
                "Record which set you played",
                "Attach a set list when you log a show so you can see which sets draw \
                 the best response.",
                RecommendationCategory::Performance,
                RecommendationPriority::Low,
            ));
        }

        recommendations
    }
}
