// ABOUTME: Recommendations driven by practice regularity, volume, and skill variety
// ABOUTME: Emits PRACTICE_ and SKILL_ prefixed candidates tagged skill-intensive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use stagecraft_core::models::PracticeSession;

use super::{GeneratorInput, RecommendationGenerator};
use crate::analytics::{analyze_practice_habits, PracticeAdjustment, PracticeConsistency};
use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};
use crate::tags::RelevanceTags;

/// Shows logged before stage preparation becomes a practice topic
const SET_PREP_MIN_SHOWS: usize = 3;

/// Focus-area keywords that count as stage preparation
const SET_PREP_KEYWORDS: [&str; 3] = ["performance", "set", "stage"];

/// Practice-habit recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct PracticeGenerator;

impl RecommendationGenerator for PracticeGenerator {
    fn name(&self) -> &'static str {
        "practice"
    }

    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate> {
        let sessions = &input.profile.practice_log;
        if sessions.is_empty() {
            return Vec::new();
        }

        let habits = analyze_practice_habits(sessions);
        let mut recommendations = Vec::new();

        if habits.consistency == PracticeConsistency::NeedsImprovement {
            recommendations.push(skill(
                "PRACTICE_CONSISTENCY",
                "Practice on a steadier schedule",
                "Your sessions are spread unevenly. Short daily sessions build more \
                 than occasional long ones; block out the same time each day.",
                RecommendationPriority::High,
            ));
        }

        match habits.recommended_adjustment {
            PracticeAdjustment::Increase => recommendations.push(skill(
                "PRACTICE_MORE_TIME",
                "Add practice time each week",
                format!(
                    "You average {:.0} minutes a week. Work toward at least two and a \
                     half hours, added in 15 minute steps.",
                    habits.weekly_average
                ),
                RecommendationPriority::Medium,
            )),
            PracticeAdjustment::Reduce => recommendations.push(skill(
                "PRACTICE_REST",
                "Build rest into your practice week",
                format!(
                    "You average {:.0} minutes a week. Schedule lighter days so your \
                     hands and focus recover.",
                    habits.weekly_average
                ),
                RecommendationPriority::Low,
            )),
            PracticeAdjustment::Maintain => {}
        }

        if habits.suggest_professional_lessons {
            recommendations.push(skill(
                "SKILL_LESSONS",
                "Take lessons to break a plateau",
                "You practice often but on a narrow set of skills. A teacher can spot \
                 what is holding you back and widen your repertoire.",
                RecommendationPriority::Medium,
            ));
        }

        if input.profile.shows.len() >= SET_PREP_MIN_SHOWS && !practices_for_stage(sessions) {
            recommendations.push(skill(
                "PRACTICE_SET_PREP",
                "Rehearse your set as a performance",
                "Run full sets start to finish, including transitions and talking \
                 between songs, as part of your practice.",
                RecommendationPriority::Low,
            ));
        }

        recommendations
    }
}

fn skill(
    id: &str,
    title: &str,
    description: impl Into<String>,
    priority: RecommendationPriority,
) -> RecommendationCandidate {
    RecommendationCandidate::new(
        id,
        title,
        description,
        RecommendationCategory::Skill,
        priority,
    )
    .tagged(RelevanceTags::SKILL_INTENSIVE)
}

fn practices_for_stage(sessions: &[PracticeSession]) -> bool {
    sessions.iter().any(|session| {
        session.focus_areas.iter().any(|area| {
            let area = area.to_lowercase();
            SET_PREP_KEYWORDS.iter().any(|keyword| area.contains(keyword))
        })
    })
}
