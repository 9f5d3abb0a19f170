// ABOUTME: Classifies a musician by career stage, focus areas, recent activity, and finances
// ABOUTME: The resulting context selects the multipliers applied to every candidate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use stagecraft_core::models::{GoalType, MusicianProfile};
use std::collections::BTreeSet;

use crate::analytics::ActivitySummary;
use crate::config::{ContextThresholds, StageCutoff};
use crate::recommendation::RecommendationCategory;

/// Career maturity derived from earnings, show count, and experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerStage {
    /// Just starting out
    Beginner,
    /// Gigging occasionally or a couple of years in
    Intermediate,
    /// Regular paid work
    Advanced,
    /// Full-time working musician
    Professional,
}

impl CareerStage {
    /// Position in benchmark tables, 0 (beginner) through 3 (professional)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
            Self::Professional => 3,
        }
    }

    /// Lower-case display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Professional => "professional",
        }
    }

    /// Classify a musician
    ///
    /// Tiers are checked from the top down and the first one that matches wins.
    #[must_use]
    pub fn classify(
        show_earnings: f64,
        show_count: usize,
        years: f64,
        thresholds: &ContextThresholds,
    ) -> Self {
        let meets = |cutoff: &StageCutoff| {
            show_earnings > cutoff.min_earnings
                && show_count > cutoff.min_shows
                && years >= cutoff.min_years
        };

        if meets(&thresholds.professional) {
            Self::Professional
        } else if meets(&thresholds.advanced) {
            Self::Advanced
        } else if show_count > thresholds.intermediate_min_shows
            || years >= thresholds.intermediate_min_years
        {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }
}

/// Coarse area of the career that looks under-addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    /// Live shows
    Performance,
    /// Promotion
    Marketing,
    /// Studio work
    Recording,
    /// Income
    Financial,
    /// Musicianship
    Skill,
}

impl FocusArea {
    /// Focus areas a recommendation category serves
    #[must_use]
    pub const fn for_category(category: RecommendationCategory) -> &'static [Self] {
        match category {
            RecommendationCategory::Skill => &[Self::Skill, Self::Recording],
            RecommendationCategory::Performance => &[Self::Performance, Self::Financial],
            RecommendationCategory::Marketing => &[Self::Marketing],
            RecommendationCategory::Networking => &[Self::Marketing, Self::Financial],
        }
    }

    /// Lower-case display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Marketing => "marketing",
            Self::Recording => "recording",
            Self::Financial => "financial",
            Self::Skill => "skill",
        }
    }
}

/// Volume of logged activity in the trailing window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Fewer than the medium cutoff
    Low,
    /// At least the medium cutoff
    Medium,
    /// At least the high cutoff
    High,
}

impl ActivityLevel {
    /// Lower-case display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Income maturity from shows and recordings combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialStatus {
    /// Little or no income yet
    Starting,
    /// Meaningful but modest income
    Growing,
    /// Substantial income
    Established,
}

impl FinancialStatus {
    /// Lower-case display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Growing => "growing",
            Self::Established => "established",
        }
    }
}

/// Classification of the user used to weight candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationContext {
    /// Career maturity
    pub career_stage: CareerStage,
    /// Under-addressed areas; never empty
    pub focus_areas: BTreeSet<FocusArea>,
    /// Trailing activity volume
    pub recent_activity_level: ActivityLevel,
    /// Income maturity
    pub financial_status: FinancialStatus,
    /// Recommendation ids the user has dismissed
    pub dismissed_recommendations: BTreeSet<String>,
}

impl RecommendationContext {
    /// Build the context for a profile at a given instant
    #[must_use]
    pub fn build(
        profile: &MusicianProfile,
        summary: &ActivitySummary,
        now: DateTime<Utc>,
        thresholds: &ContextThresholds,
    ) -> Self {
        Self {
            career_stage: CareerStage::classify(
                summary.total_show_earnings,
                summary.show_count,
                profile.years_of_experience,
                thresholds,
            ),
            focus_areas: identify_focus_areas(profile, thresholds),
            recent_activity_level: recent_activity_level(profile, now, thresholds),
            financial_status: financial_status(summary.total_revenue(), thresholds),
            dismissed_recommendations: profile.preferences.dismissed_recommendations.clone(),
        }
    }

    /// Whether a recommendation category serves one of the user's focus areas
    #[must_use]
    pub fn matches_focus(&self, category: RecommendationCategory) -> bool {
        FocusArea::for_category(category)
            .iter()
            .any(|area| self.focus_areas.contains(area))
    }

    /// Whether the user dismissed a recommendation id
    #[must_use]
    pub fn is_dismissed(&self, id: &str) -> bool {
        self.dismissed_recommendations.contains(id)
    }
}

fn identify_focus_areas(
    profile: &MusicianProfile,
    thresholds: &ContextThresholds,
) -> BTreeSet<FocusArea> {
    let mut areas = BTreeSet::new();

    if profile.performance_frequency.is_low() {
        areas.insert(FocusArea::Performance);
    }
    if profile.has_no_marketing() {
        areas.insert(FocusArea::Marketing);
    }
    if profile.years_of_experience >= thresholds.recording_focus_min_years
        && profile.recordings.is_empty()
    {
        areas.insert(FocusArea::Recording);
    }
    if profile
        .goals
        .iter()
        .any(|goal| goal.goal_type == GoalType::Financial)
    {
        areas.insert(FocusArea::Financial);
    }
    if profile
        .goals
        .iter()
        .any(|goal| goal.goal_type == GoalType::Skill)
    {
        areas.insert(FocusArea::Skill);
    }

    if areas.is_empty() {
        areas.insert(FocusArea::Skill);
        areas.insert(FocusArea::Performance);
    }
    areas
}

fn recent_activity_level(
    profile: &MusicianProfile,
    now: DateTime<Utc>,
    thresholds: &ContextThresholds,
) -> ActivityLevel {
    let window_start = now
        .checked_sub_months(Months::new(thresholds.recent_activity_months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let in_window = |date: &DateTime<Utc>| *date >= window_start && *date <= now;

    let recent = profile.shows.iter().filter(|s| in_window(&s.date)).count()
        + profile
            .practice_log
            .iter()
            .filter(|s| in_window(&s.date))
            .count()
        + profile
            .recordings
            .iter()
            .filter(|r| in_window(&r.date))
            .count();

    if recent >= thresholds.high_activity_count {
        ActivityLevel::High
    } else if recent >= thresholds.medium_activity_count {
        ActivityLevel::Medium
    } else {
        ActivityLevel::Low
    }
}

fn financial_status(total_revenue: f64, thresholds: &ContextThresholds) -> FinancialStatus {
    if total_revenue > thresholds.established_revenue {
        FinancialStatus::Established
    } else if total_revenue > thresholds.growing_revenue {
        FinancialStatus::Growing
    } else {
        FinancialStatus::Starting
    }
}
