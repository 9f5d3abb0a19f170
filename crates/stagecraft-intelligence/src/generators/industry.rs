// ABOUTME: Compares fees, audiences, show rate, and practice time against industry norms
// ABOUTME: Emits BENCH_ prefixed candidates keyed by career stage and venue type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use stagecraft_core::constants::time_windows::DAYS_PER_MONTH;
use stagecraft_core::models::{PerformanceRecord, VenueType};

use super::{GeneratorInput, RecommendationGenerator};
use crate::analytics::analyze_practice_habits;
use crate::benchmarks::{self, audience, fees, practice, shows};
use crate::context::CareerStage;
use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};
use crate::tags::RelevanceTags;

/// Industry-benchmark recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct IndustryBenchmarkGenerator;

impl RecommendationGenerator for IndustryBenchmarkGenerator {
    fn name(&self) -> &'static str {
        "industry"
    }

    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate> {
        let profile = input.profile;
        if profile.shows.is_empty() && profile.practice_log.is_empty() {
            return Vec::new();
        }

        let stage = input.context.career_stage;
        let mut recommendations = Vec::new();

        if !profile.shows.is_empty() {
            recommendations.extend(fee_recommendations(&profile.shows, stage));

            let typical_audience = profile
                .shows
                .iter()
                .map(|show| f64::from(benchmarks::typical_audience(stage, show.venue_type)))
                .sum::<f64>()
                / profile.shows.len() as f64;
            if input.summary.average_audience < typical_audience * audience::UNDERSIZED_RATIO {
                recommendations.push(RecommendationCandidate::new(
                    "BENCH_AUDIENCE",
                    "Your crowds trail similar acts",
                    format!(
                        "You average {:.0} people where {} acts at these venues typically \
                         draw about {typical_audience:.0}. Invest in pre-show promotion.",
                        input.summary.average_audience,
                        stage.as_str()
                    ),
                    RecommendationCategory::Marketing,
                    RecommendationPriority::Medium,
                ));
            }

            let months = profile
                .shows
                .iter()
                .map(|show| show.date)
                .min()
                .map_or(1.0, |first| {
                    ((input.now - first).num_days() as f64 / DAYS_PER_MONTH).max(1.0)
                });
            let monthly_rate = profile.shows.len() as f64 / months;
            let norm = benchmarks::monthly_show_norm(stage);
            if monthly_rate < norm * shows::LAGGING_RATIO {
                recommendations.push(RecommendationCandidate::new(
                    "BENCH_SHOW_FREQUENCY",
                    "Play out more often",
                    format!(
                        "You play about {monthly_rate:.1} shows a month; {} musicians \
                         typically play {norm:.1}. Add one recurring date.",
                        stage.as_str()
                    ),
                    RecommendationCategory::Performance,
                    RecommendationPriority::Medium,
                ));
            }
        }

        if !profile.practice_log.is_empty() {
            let weekly = analyze_practice_habits(&profile.practice_log).weekly_average;
            let norm = benchmarks::weekly_practice_minutes(stage);
            let description = if weekly < norm.min_minutes * practice::LAGGING_RATIO {
                Some(format!(
                    "You practice about {weekly:.0} minutes a week; {} musicians typically \
                     put in {:.0} to {:.0}. Add a few focused sessions.",
                    stage.as_str(),
                    norm.min_minutes,
                    norm.max_minutes
                ))
            } else if weekly > norm.max_minutes * practice::OVERTRAINING_MULTIPLE {
                Some(format!(
                    "You practice about {weekly:.0} minutes a week, far above the {:.0} \
                     typical at your stage. Watch for strain and build in rest.",
                    norm.max_minutes
                ))
            } else {
                None
            };

            if let Some(description) = description {
                recommendations.push(
                    RecommendationCandidate::new(
                        "BENCH_PRACTICE",
                        "Bring practice time in line with your stage",
                        description,
                        RecommendationCategory::Skill,
                        RecommendationPriority::Medium,
                    )
                    .tagged(RelevanceTags::SKILL_INTENSIVE),
                );
            }
        }

        recommendations
    }
}

/// One high-priority candidate per venue type where pay trails the benchmark
fn fee_recommendations(
    shows: &[PerformanceRecord],
    stage: CareerStage,
) -> Vec<RecommendationCandidate> {
    VenueType::ALL
        .iter()
        .filter_map(|venue| {
            let payments: Vec<f64> = shows
                .iter()
                .filter(|show| show.venue_type == *venue)
                .map(|show| show.payment)
                .collect();
            if payments.len() < fees::MIN_SHOWS_PER_VENUE_TYPE {
                return None;
            }

            let average = payments.iter().sum::<f64>() / payments.len() as f64;
            let typical = benchmarks::typical_fee(stage, *venue);
            (average < typical * fees::UNDERPAID_RATIO).then(|| {
                RecommendationCandidate::new(
                    format!("BENCH_FEE_{}", venue.id_token()),
                    format!("Raise your {} fee", venue.label()),
                    format!(
                        "You average {average:.0} per {} show; {} acts typically earn \
                         about {typical:.0}. Quote a higher guarantee on your next booking.",
                        venue.label(),
                        stage.as_str()
                    ),
                    RecommendationCategory::Marketing,
                    RecommendationPriority::High,
                )
            })
        })
        .collect()
}
