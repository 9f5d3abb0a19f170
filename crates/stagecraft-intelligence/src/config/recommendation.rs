// ABOUTME: Recommendation engine configuration for output limits, scoring, and weighting curves
// ABOUTME: Every default here reproduces the documented engine behavior exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Recommendation Engine Configuration
//!
//! Output bounds, priority base scores, the contextual multiplier tables, and
//! the cutoffs used to classify a user. Defaults are the production values.

use serde::{Deserialize, Serialize};
use stagecraft_core::constants::{limits, time_windows};

use crate::context::{ActivityLevel, CareerStage, FinancialStatus};
use crate::recommendation::{RecommendationCategory, RecommendationPriority};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationEngineConfig {
    /// Bounds on the number of recommendations
    pub limits: RecommendationLimits,
    /// Base score per priority
    pub scoring: PriorityScores,
    /// Contextual multiplier tables
    pub multipliers: WeightingMultipliers,
    /// Cutoffs used to classify the user
    pub thresholds: ContextThresholds,
}

/// Bounds on the number of recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationLimits {
    /// Static-rule matches below this count are topped up with the fallback
    pub min_recommendations: usize,
    /// Ranked output is truncated to this length
    pub max_recommendations: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            min_recommendations: limits::MIN_RECOMMENDATIONS,
            max_recommendations: limits::MAX_RECOMMENDATIONS,
        }
    }
}

/// Base score per priority before any multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityScores {
    /// High priority base score
    pub high: f64,
    /// Medium priority base score
    pub medium: f64,
    /// Low priority base score
    pub low: f64,
}

impl PriorityScores {
    /// Base score for a priority
    #[must_use]
    pub const fn score(&self, priority: RecommendationPriority) -> f64 {
        match priority {
            RecommendationPriority::High => self.high,
            RecommendationPriority::Medium => self.medium,
            RecommendationPriority::Low => self.low,
        }
    }
}

impl Default for PriorityScores {
    fn default() -> Self {
        Self {
            high: 100.0,
            medium: 60.0,
            low: 30.0,
        }
    }
}

/// One multiplier per career stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageCurve {
    /// Multiplier for beginners
    pub beginner: f64,
    /// Multiplier for intermediate musicians
    pub intermediate: f64,
    /// Multiplier for advanced musicians
    pub advanced: f64,
    /// Multiplier for professionals
    pub professional: f64,
}

impl StageCurve {
    /// Multiplier for a stage
    #[must_use]
    pub const fn get(&self, stage: CareerStage) -> f64 {
        match stage {
            CareerStage::Beginner => self.beginner,
            CareerStage::Intermediate => self.intermediate,
            CareerStage::Advanced => self.advanced,
            CareerStage::Professional => self.professional,
        }
    }

    const fn values(&self) -> [f64; 4] {
        [
            self.beginner,
            self.intermediate,
            self.advanced,
            self.professional,
        ]
    }
}

/// One multiplier per recent activity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelCurve {
    /// Multiplier at low activity
    pub low: f64,
    /// Multiplier at medium activity
    pub medium: f64,
    /// Multiplier at high activity
    pub high: f64,
}

impl LevelCurve {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn get(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Low => self.low,
            ActivityLevel::Medium => self.medium,
            ActivityLevel::High => self.high,
        }
    }

    const fn values(&self) -> [f64; 3] {
        [self.low, self.medium, self.high]
    }
}

/// One multiplier per financial status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialCurve {
    /// Multiplier while starting out
    pub starting: f64,
    /// Multiplier while growing
    pub growing: f64,
    /// Multiplier once established
    pub established: f64,
}

impl FinancialCurve {
    /// Multiplier for a financial status
    #[must_use]
    pub const fn get(&self, status: FinancialStatus) -> f64 {
        match status {
            FinancialStatus::Starting => self.starting,
            FinancialStatus::Growing => self.growing,
            FinancialStatus::Established => self.established,
        }
    }

    const fn values(&self) -> [f64; 3] {
        [self.starting, self.growing, self.established]
    }
}

/// Career-stage curve per recommendation category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerStageMultipliers {
    /// Skill recommendations
    pub skill: StageCurve,
    /// Performance recommendations
    pub performance: StageCurve,
    /// Marketing recommendations
    pub marketing: StageCurve,
    /// Networking recommendations
    pub networking: StageCurve,
}

impl CareerStageMultipliers {
    /// Curve for a category
    #[must_use]
    pub const fn for_category(&self, category: RecommendationCategory) -> &StageCurve {
        match category {
            RecommendationCategory::Skill => &self.skill,
            RecommendationCategory::Performance => &self.performance,
            RecommendationCategory::Marketing => &self.marketing,
            RecommendationCategory::Networking => &self.networking,
        }
    }
}

impl Default for CareerStageMultipliers {
    fn default() -> Self {
        Self {
            skill: StageCurve {
                beginner: 1.4,
                intermediate: 1.2,
                advanced: 1.0,
                professional: 0.8,
            },
            performance: StageCurve {
                beginner: 1.2,
                intermediate: 1.3,
                advanced: 1.1,
                professional: 0.9,
            },
            marketing: StageCurve {
                beginner: 0.8,
                intermediate: 1.1,
                advanced: 1.3,
                professional: 1.2,
            },
            networking: StageCurve {
                beginner: 0.7,
                intermediate: 1.0,
                advanced: 1.2,
                professional: 1.4,
            },
        }
    }
}

/// Activity-level curves; skill-intensive wins when both tags are present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMultipliers {
    /// Candidates tagged skill-intensive
    pub skill_intensive: LevelCurve,
    /// Candidates tagged performance-intensive
    pub performance_intensive: LevelCurve,
}

impl Default for ActivityMultipliers {
    fn default() -> Self {
        Self {
            skill_intensive: LevelCurve {
                low: 1.2,
                medium: 1.0,
                high: 0.9,
            },
            performance_intensive: LevelCurve {
                low: 0.8,
                medium: 1.0,
                high: 1.3,
            },
        }
    }
}

/// Financial-status curves; revenue-focused wins when both tags are present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMultipliers {
    /// Candidates tagged revenue-focused
    pub revenue_focused: FinancialCurve,
    /// Candidates tagged foundational
    pub foundational: FinancialCurve,
}

impl Default for FinancialMultipliers {
    fn default() -> Self {
        Self {
            revenue_focused: FinancialCurve {
                starting: 0.7,
                growing: 1.1,
                established: 1.4,
            },
            foundational: FinancialCurve {
                starting: 1.3,
                growing: 1.0,
                established: 0.8,
            },
        }
    }
}

/// In-season boosts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalMultipliers {
    /// Holiday-season candidates, November through January
    pub holiday: f64,
    /// Summer-season candidates, June through September
    pub summer: f64,
    /// Recording candidates, November through February
    pub recording: f64,
}

impl Default for SeasonalMultipliers {
    fn default() -> Self {
        Self {
            holiday: 1.5,
            summer: 1.4,
            recording: 1.1,
        }
    }
}

/// Every contextual multiplier table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingMultipliers {
    /// Career-stage fit per category
    pub career_stage: CareerStageMultipliers,
    /// Applied when a category maps to one of the user's focus areas
    pub focus_match: f64,
    /// Activity-level fit
    pub activity: ActivityMultipliers,
    /// Financial-status fit
    pub financial: FinancialMultipliers,
    /// Seasonal timing
    pub seasonal: SeasonalMultipliers,
}

impl Default for WeightingMultipliers {
    fn default() -> Self {
        Self {
            career_stage: CareerStageMultipliers::default(),
            focus_match: 1.3,
            activity: ActivityMultipliers::default(),
            financial: FinancialMultipliers::default(),
            seasonal: SeasonalMultipliers::default(),
        }
    }
}

impl WeightingMultipliers {
    /// Every multiplier value in the tables
    pub(crate) fn all_values(&self) -> Vec<f64> {
        let stages = &self.career_stage;
        let mut values = Vec::with_capacity(32);
        for curve in [
            &stages.skill,
            &stages.performance,
            &stages.marketing,
            &stages.networking,
        ] {
            values.extend(curve.values());
        }
        values.push(self.focus_match);
        values.extend(self.activity.skill_intensive.values());
        values.extend(self.activity.performance_intensive.values());
        values.extend(self.financial.revenue_focused.values());
        values.extend(self.financial.foundational.values());
        values.extend([
            self.seasonal.holiday,
            self.seasonal.summer,
            self.seasonal.recording,
        ]);
        values
    }
}

/// Minimums for one career-stage tier; all three must be exceeded or met
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageCutoff {
    /// Show earnings must be strictly above this
    pub min_earnings: f64,
    /// Show count must be strictly above this
    pub min_shows: usize,
    /// Years of experience must be at least this
    pub min_years: f64,
}

/// Cutoffs used to classify the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextThresholds {
    /// Trailing window for the recent activity count
    pub recent_activity_months: u32,
    /// Recent activity count at or above which activity is high
    pub high_activity_count: usize,
    /// Recent activity count at or above which activity is medium
    pub medium_activity_count: usize,
    /// Professional tier
    pub professional: StageCutoff,
    /// Advanced tier
    pub advanced: StageCutoff,
    /// Intermediate when show count is strictly above this
    pub intermediate_min_shows: usize,
    /// Intermediate when years of experience is at least this
    pub intermediate_min_years: f64,
    /// Total revenue strictly above this is established
    pub established_revenue: f64,
    /// Total revenue strictly above this is growing
    pub growing_revenue: f64,
    /// Years of experience at which a missing recording catalog becomes a focus
    pub recording_focus_min_years: f64,
}

impl Default for ContextThresholds {
    fn default() -> Self {
        Self {
            recent_activity_months: time_windows::RECENT_ACTIVITY_MONTHS,
            high_activity_count: 10,
            medium_activity_count: 3,
            professional: StageCutoff {
                min_earnings: 10_000.0,
                min_shows: 50,
                min_years: 5.0,
            },
            advanced: StageCutoff {
                min_earnings: 2_000.0,
                min_shows: 15,
                min_years: 3.0,
            },
            intermediate_min_shows: 5,
            intermediate_min_years: 2.0,
            established_revenue: 5_000.0,
            growing_revenue: 500.0,
            recording_focus_min_years: 3.0,
        }
    }
}
