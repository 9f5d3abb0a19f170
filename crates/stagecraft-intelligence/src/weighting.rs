// ABOUTME: Contextual scoring, dismissal filtering, deduplication, ordering, and truncation
// ABOUTME: Multiplies a priority base score by stage, focus, activity, finance, and season factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! # Personalization
//!
//! `score = base(priority) × stage(category) × focus(category) × activity(tags)
//! × finance(tags) × season(tags, month)`
//!
//! Ties keep their input order: the sort is stable, so among equal scores the
//! static rules come first, then generators in run order.

use chrono::{DateTime, Datelike, Utc};
use std::collections::HashSet;

use crate::config::RecommendationEngineConfig;
use crate::context::RecommendationContext;
use crate::recommendation::{RecommendationCandidate, WeightedRecommendation};
use crate::tags::RelevanceTags;

/// November, December, January
const HOLIDAY_MONTHS: [u32; 3] = [11, 12, 1];

/// June through September
const SUMMER_MONTHS: [u32; 4] = [6, 7, 8, 9];

/// November through February
const RECORDING_MONTHS: [u32; 4] = [11, 12, 1, 2];

/// Scores and orders candidates for one user
#[derive(Debug, Clone, Copy)]
pub struct PersonalizationEngine<'a> {
    config: &'a RecommendationEngineConfig,
}

impl<'a> PersonalizationEngine<'a> {
    /// Create a weighting engine over the given configuration
    #[must_use]
    pub const fn new(config: &'a RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Filter, score, deduplicate, sort, and truncate
    ///
    /// Candidates are taken in concatenation order; the first occurrence of an id
    /// wins. The result holds at most `max_recommendations` entries and may be
    /// empty when every candidate was dismissed.
    #[must_use]
    pub fn rank(
        &self,
        candidates: Vec<RecommendationCandidate>,
        context: &RecommendationContext,
        now: DateTime<Utc>,
    ) -> Vec<WeightedRecommendation> {
        let mut seen = HashSet::new();
        let mut weighted: Vec<WeightedRecommendation> = candidates
            .into_iter()
            .filter(|candidate| !context.is_dismissed(candidate.id()))
            .filter(|candidate| seen.insert(candidate.id().to_owned()))
            .map(|candidate| self.weigh(candidate, context, now))
            .collect();

        weighted.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
        weighted.truncate(self.config.limits.max_recommendations);
        weighted
    }

    /// Score one candidate
    #[must_use]
    pub fn weigh(
        &self,
        candidate: RecommendationCandidate,
        context: &RecommendationContext,
        now: DateTime<Utc>,
    ) -> WeightedRecommendation {
        let multipliers = &self.config.multipliers;
        let RecommendationCandidate {
            recommendation,
            tags,
        } = candidate;
        let mut factors = Vec::new();

        let mut score = self.config.scoring.score(recommendation.priority);

        let stage = multipliers
            .career_stage
            .for_category(recommendation.category)
            .get(context.career_stage);
        score *= stage;
        note(
            &mut factors,
            stage,
            &format!("{} career stage", context.career_stage.as_str()),
        );

        if context.matches_focus(recommendation.category) {
            score *= multipliers.focus_match;
            note(
                &mut factors,
                multipliers.focus_match,
                "matches a focus area",
            );
        }

        let level = context.recent_activity_level;
        let activity = if tags.contains(RelevanceTags::SKILL_INTENSIVE) {
            Some(multipliers.activity.skill_intensive.get(level))
        } else if tags.contains(RelevanceTags::PERFORMANCE_INTENSIVE) {
            Some(multipliers.activity.performance_intensive.get(level))
        } else {
            None
        };
        if let Some(activity) = activity {
            score *= activity;
            note(
                &mut factors,
                activity,
                &format!("{} recent activity", level.as_str()),
            );
        }

        let status = context.financial_status;
        let financial = if tags.contains(RelevanceTags::REVENUE_FOCUSED) {
            Some(multipliers.financial.revenue_focused.get(status))
        } else if tags.contains(RelevanceTags::FOUNDATIONAL) {
            Some(multipliers.financial.foundational.get(status))
        } else {
            None
        };
        if let Some(financial) = financial {
            score *= financial;
            note(
                &mut factors,
                financial,
                &format!("{} finances", status.as_str()),
            );
        }

        for (seasonal, label) in self.seasonal_multipliers(tags, now.month()) {
            score *= seasonal;
            note(&mut factors, seasonal, label);
        }

        WeightedRecommendation {
            recommendation,
            tags,
            weighted_score: score,
            relevance_factors: factors,
        }
    }

    /// In-season boosts that apply to the tags in the given month
    fn seasonal_multipliers(&self, tags: RelevanceTags, month: u32) -> Vec<(f64, &'static str)> {
        let seasonal = &self.config.multipliers.seasonal;
        let mut boosts = Vec::new();
        if tags.contains(RelevanceTags::HOLIDAY_SEASON) && HOLIDAY_MONTHS.contains(&month) {
            boosts.push((seasonal.holiday, "holiday season"));
        }
        if tags.contains(RelevanceTags::SUMMER_SEASON) && SUMMER_MONTHS.contains(&month) {
            boosts.push((seasonal.summer, "festival season"));
        }
        if tags.contains(RelevanceTags::RECORDING) && RECORDING_MONTHS.contains(&month) {
            boosts.push((seasonal.recording, "recording season"));
        }
        boosts
    }
}

/// Record a factor unless it is neutral
fn note(factors: &mut Vec<String>, multiplier: f64, label: &str) {
    if (multiplier - 1.0).abs() > f64::EPSILON {
        factors.push(format!("{label} x{multiplier:.2}"));
    }
}
