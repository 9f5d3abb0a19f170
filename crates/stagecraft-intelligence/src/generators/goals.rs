// ABOUTME: Recommendations driven by goal status, deadlines, progress, and goal load
// ABOUTME: Emits GOAL_ prefixed candidates categorized by the goal type they concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::Duration;
use stagecraft_core::models::{Goal, GoalType};

use super::{GeneratorInput, RecommendationGenerator};
use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};

/// Days before a deadline that count as "near"
const DEADLINE_WARNING_DAYS: i64 = 14;

/// Progress below which a near deadline is at risk
const DEADLINE_AT_RISK_PROGRESS: f64 = 0.75;

/// Active goals above which focus suffers
const MAX_ACTIVE_GOALS: usize = 5;

/// Days at zero progress before a goal counts as stalled
const STALLED_AFTER_DAYS: i64 = 60;

/// Financial goals below this progress get an income nudge
const FINANCIAL_BEHIND_PROGRESS: f64 = 0.5;

/// Goal-status recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalGenerator;

impl RecommendationGenerator for GoalGenerator {
    fn name(&self) -> &'static str {
        "goals"
    }

    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate> {
        let goals = &input.profile.goals;
        if goals.is_empty() {
            return Vec::new();
        }

        let now = input.now;
        let active: Vec<&Goal> = goals.iter().filter(|goal| goal.is_active()).collect();
        let mut recommendations = Vec::new();

        if active.is_empty() {
            recommendations.push(RecommendationCandidate::new(
                "GOAL_SET_NEW",
                "Set your next goal",
                "None of your goals are active. Pick one measurable target for the \
                 next three months to keep moving forward.",
                RecommendationCategory::Skill,
                RecommendationPriority::Medium,
            ));
            return recommendations;
        }

        let overdue: Vec<&Goal> = active
            .iter()
            .copied()
            .filter(|goal| goal.is_overdue(now))
            .collect();
        if let Some(first) = overdue.first() {
            let others = overdue.len() - 1;
            let tail = if others == 0 {
                String::new()
            } else {
                format!(" ({others} more overdue)")
            };
            recommendations.push(RecommendationCandidate::new(
                "GOAL_OVERDUE",
                "Revisit overdue goals",
                format!(
                    "\"{}\" is past its deadline{tail}. Set a new date or break it into \
                     smaller steps you can finish this month.",
                    first.title
                ),
                category_for(first.goal_type),
                RecommendationPriority::High,
            ));
        }

        let warning_horizon = now + Duration::days(DEADLINE_WARNING_DAYS);
        if let Some(goal) = active.iter().find(|goal| {
            goal.deadline
                .is_some_and(|deadline| deadline >= now && deadline <= warning_horizon)
                && goal
                    .progress_ratio()
                    .is_some_and(|ratio| ratio < DEADLINE_AT_RISK_PROGRESS)
        }) {
            recommendations.push(RecommendationCandidate::new(
                "GOAL_DEADLINE_NEAR",
                "A goal deadline is coming up",
                format!(
                    "\"{}\" is due within two weeks and is under three-quarters done. \
                     Make it the priority of your next few sessions.",
                    goal.title
                ),
                category_for(goal.goal_type),
                RecommendationPriority::High,
            ));
        }

        if active.len() > MAX_ACTIVE_GOALS {
            recommendations.push(RecommendationCandidate::new(
                "GOAL_FOCUS",
                "Narrow your active goals",
                format!(
                    "You have {} active goals. Pause the least important so the top \
                     three get your full attention.",
                    active.len()
                ),
                RecommendationCategory::Skill,
                RecommendationPriority::Medium,
            ));
        }

        let stalled_before = now - Duration::days(STALLED_AFTER_DAYS);
        if let Some(goal) = active
            .iter()
            .find(|goal| goal.created_at < stalled_before && goal.current_value <= 0.0)
        {
            recommendations.push(RecommendationCandidate::new(
                "GOAL_STALLED",
                "Restart a stalled goal",
                format!(
                    "\"{}\" has not moved in two months. Define the very first step and \
                     schedule it this week.",
                    goal.title
                ),
                category_for(goal.goal_type),
                RecommendationPriority::Medium,
            ));
        }

        if active.iter().any(|goal| {
            goal.goal_type == GoalType::Financial
                && goal
                    .progress_ratio()
                    .is_some_and(|ratio| ratio < FINANCIAL_BEHIND_PROGRESS)
        }) {
            recommendations.push(RecommendationCandidate::new(
                "GOAL_FINANCIAL_TARGET",
                "Close the gap on your income goal",
                format!(
                    "You have earned {:.0} so far. Add a paid private event or merch \
                     push to move your financial goal forward.",
                    input.summary.total_revenue()
                ),
                RecommendationCategory::Marketing,
                RecommendationPriority::Medium,
            ));
        }

        if active
            .iter()
            .any(|goal| goal.target_value.is_some() && !goal.auto_update)
        {
            recommendations.push(RecommendationCandidate::new(
                "GOAL_LINK_ACTIVITY",
                "Link goals to your logged activity",
                "Connect measurable goals to shows or practice sessions so progress \
                 updates automatically as you log.",
                RecommendationCategory::Skill,
                RecommendationPriority::Low,
            ));
        }

        recommendations
    }
}

const fn category_for(goal_type: GoalType) -> RecommendationCategory {
    match goal_type {
        GoalType::Performance => RecommendationCategory::Performance,
        GoalType::Financial => RecommendationCategory::Marketing,
        GoalType::Skill | GoalType::Recording | GoalType::Custom => RecommendationCategory::Skill,
    }
}
