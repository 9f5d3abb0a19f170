// ABOUTME: Recommendations driven by show frequency, venue quality, audience, and pay trends
// ABOUTME: Emits PERF_ and VENUE_ prefixed candidates tagged performance-intensive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use stagecraft_core::models::PerformanceRecord;

use super::{GeneratorInput, RecommendationGenerator};
use crate::analytics::{
    analyze_performance_trends, average_venue_score, FrequencyTrend, VenueProgression,
};
use crate::benchmarks::audience::SMALL_AUDIENCE;
use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};
use crate::tags::RelevanceTags;

/// Shows needed before a low-tier venue history suggests stepping up
const STEP_UP_MIN_SHOWS: usize = 6;

/// Mean venue score at or below which the history is low-tier
const STEP_UP_MAX_VENUE_SCORE: f64 = 2.0;

/// Shows at a single venue type before variety is suggested
const VARIETY_MIN_SHOWS: usize = 3;

/// Shows needed before the unpaid share is judged
const UNPAID_MIN_SHOWS: usize = 4;

/// Unpaid share at or above which pay is addressed
const UNPAID_SHARE: f64 = 0.5;

/// Performance-trend recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceGenerator;

impl RecommendationGenerator for PerformanceGenerator {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate> {
        let shows = &input.profile.shows;
        if shows.is_empty() {
            return Vec::new();
        }

        let trends = analyze_performance_trends(shows);
        let mut recommendations = Vec::new();

        match trends.show_frequency {
            FrequencyTrend::Decreasing => recommendations.push(perf(
                "PERF_FREQ_DECLINING",
                "Your show schedule is slowing down",
                "You are playing out less often than before. Reach back out to venues \
                 that booked you and pencil in dates for the next two months.",
                RecommendationCategory::Performance,
                RecommendationPriority::High,
            )),
            FrequencyTrend::Increasing => recommendations.push(perf(
                "PERF_FREQ_MOMENTUM",
                "Keep your booking momentum",
                "You are gigging more often. Lock in repeat dates with the venues \
                 that went best while demand is high.",
                RecommendationCategory::Performance,
                RecommendationPriority::Low,
            )),
            FrequencyTrend::Stable => {}
        }

        match trends.venue_progression {
            VenueProgression::Declining => recommendations.push(perf(
                "VENUE_QUALITY_DECLINE",
                "Aim back up at stronger venues",
                "Your recent shows are at smaller rooms than before. Pitch the kinds \
                 of venues you played earlier using your best recent recordings.",
                RecommendationCategory::Performance,
                RecommendationPriority::Medium,
            )),
            VenueProgression::Improving => recommendations.push(perf(
                "VENUE_QUALITY_RISE",
                "Use your venue upgrades to open doors",
                "You are landing better rooms. Ask the bookers at those venues for \
                 introductions to promoters and festival programmers.",
                RecommendationCategory::Networking,
                RecommendationPriority::Low,
            )),
            VenueProgression::Stable => {}
        }

        if shows.len() >= STEP_UP_MIN_SHOWS
            && average_venue_score(shows) <= STEP_UP_MAX_VENUE_SCORE
        {
            recommendations.push(perf(
                "VENUE_STEP_UP",
                "Step up from bars and restaurants",
                "You have a solid run of shows at entry-level rooms. Build relationships \
                 with bookers at concert halls and private-event agencies.",
                RecommendationCategory::Networking,
                RecommendationPriority::Medium,
            ));
        }

        if trends.average_audience_size < SMALL_AUDIENCE {
            recommendations.push(perf(
                "PERF_AUDIENCE_BUILD",
                "Grow the crowd at your shows",
                format!(
                    "Your shows average {:.0} people. Promote each date a week ahead \
                     and co-bill with acts that already draw.",
                    trends.average_audience_size
                ),
                RecommendationCategory::Marketing,
                RecommendationPriority::Medium,
            ));
        }

        if shows.len() >= VARIETY_MIN_SHOWS && is_single_venue_type(shows) {
            recommendations.push(perf(
                "VENUE_VARIETY",
                "Try a different kind of venue",
                "Every show so far has been at the same kind of venue. A private event \
                 or festival slot reaches a new audience.",
                RecommendationCategory::Performance,
                RecommendationPriority::Low,
            ));
        }

        if shows.len() >= UNPAID_MIN_SHOWS {
            let unpaid = shows.iter().filter(|show| show.payment <= 0.0).count();
            if unpaid as f64 / shows.len() as f64 >= UNPAID_SHARE {
                recommendations.push(perf(
                    "PERF_UNPAID_SHOWS",
                    "Start charging for your shows",
                    format!(
                        "{unpaid} of your {} shows paid nothing. Ask for a guarantee, a door \
                         split, or at least a tip jar and merch table.",
                        shows.len()
                    ),
                    RecommendationCategory::Marketing,
                    RecommendationPriority::Medium,
                ));
            }
        }

        recommendations
    }
}

fn perf(
    id: &str,
    title: &str,
    description: impl Into<String>,
    category: RecommendationCategory,
    priority: RecommendationPriority,
) -> RecommendationCandidate {
    RecommendationCandidate::new(id, title, description, category, priority)
        .tagged(RelevanceTags::PERFORMANCE_INTENSIVE)
}

fn is_single_venue_type(shows: &[PerformanceRecord]) -> bool {
    shows
        .first()
        .is_some_and(|first| shows.iter().all(|show| show.venue_type == first.venue_type))
}
