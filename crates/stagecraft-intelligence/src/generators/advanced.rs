// ABOUTME: Cross-cutting advice on revenue, creative growth, business, seasons, and technique
// ABOUTME: Emits ADV_ prefixed candidates with revenue, seasonal, and skill relevance tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use stagecraft_core::constants::marketing;
use stagecraft_core::models::{GoalType, MusicianProfile, VenueType};
use std::collections::HashSet;

use super::{GeneratorInput, RecommendationGenerator};
use crate::analytics::ActivitySummary;
use crate::benchmarks::{audience, compatible_genres, fees, recording};
use crate::context::{CareerStage, FinancialStatus, RecommendationContext};
use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};
use crate::tags::RelevanceTags;

/// Shows needed before revenue and seasonal advice apply
const MIN_SHOWS: usize = 3;

/// Shows needed before business-level advice applies
const BUSINESS_MIN_SHOWS: usize = 5;

/// Years after which writing originals is expected
const SONGWRITING_MIN_YEARS: f64 = 2.0;

/// Practice keywords that count as songwriting
const SONGWRITING_KEYWORDS: [&str; 3] = ["songwriting", "composition", "writing"];

/// Practice keywords that count as technique work
const TECHNIQUE_KEYWORDS: [&str; 3] = ["technique", "technical", "scales"];

/// Cross-cutting recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedGenerator;

impl RecommendationGenerator for AdvancedGenerator {
    fn name(&self) -> &'static str {
        "advanced"
    }

    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate> {
        let profile = input.profile;
        if profile.shows.is_empty()
            && profile.practice_log.is_empty()
            && profile.recordings.is_empty()
        {
            return Vec::new();
        }

        let mut recommendations = Vec::new();
        revenue_optimization(profile, input.summary, input.context, &mut recommendations);
        creative_development(profile, &mut recommendations);
        business_development(profile, input.context, &mut recommendations);
        seasonal_timing(profile, &mut recommendations);
        audience_engagement(profile, input.summary, &mut recommendations);
        technical_skill(profile, &mut recommendations);
        recommendations
    }
}

fn revenue_optimization(
    profile: &MusicianProfile,
    summary: &ActivitySummary,
    context: &RecommendationContext,
    out: &mut Vec<RecommendationCandidate>,
) {
    if summary.show_count >= MIN_SHOWS
        && summary.average_payment < fees::MERCH_FEE_THRESHOLD
        && summary.average_audience >= audience::SMALL_AUDIENCE
    {
        out.push(
            RecommendationCandidate::new(
                "ADV_REV_OPT_MERCH",
                "Sell merch at your shows",
                format!(
                    "Fees average {:.0} but you draw around {:.0} people. Shirts, stickers, \
                     and download cards can out-earn the guarantee.",
                    summary.average_payment, summary.average_audience
                ),
                RecommendationCategory::Marketing,
                RecommendationPriority::Medium,
            )
            .tagged(RelevanceTags::REVENUE_FOCUSED),
        );
    }

    let total_revenue = summary.total_revenue();
    if !profile.recordings.is_empty()
        && total_revenue > 0.0
        && summary.total_recording_revenue / total_revenue < recording::LOW_STREAMING_SHARE
    {
        out.push(
            RecommendationCandidate::new(
                "ADV_REV_OPT_STREAMING",
                "Make your recordings earn",
                "Recordings bring in under a tenth of your income. Register with a \
                 distributor and a performing rights organization to collect royalties.",
                RecommendationCategory::Marketing,
                RecommendationPriority::Low,
            )
            .tagged(RelevanceTags::REVENUE_FOCUSED),
        );
    }

    let plays_private = profile
        .shows
        .iter()
        .any(|show| show.venue_type == VenueType::PrivateEvent);
    if summary.show_count >= BUSINESS_MIN_SHOWS
        && context.career_stage >= CareerStage::Intermediate
        && !plays_private
    {
        out.push(
            RecommendationCandidate::new(
                "ADV_REV_OPT_PRIVATE",
                "Book private events",
                "Weddings and corporate events pay several times a club fee. List \
                 yourself with local event planners and agencies.",
                RecommendationCategory::Performance,
                RecommendationPriority::Medium,
            )
            .tagged(RelevanceTags::REVENUE_FOCUSED),
        );
    }
}

fn creative_development(profile: &MusicianProfile, out: &mut Vec<RecommendationCandidate>) {
    let skills = practiced_topics(profile);
    if !profile.practice_log.is_empty()
        && profile.years_of_experience >= SONGWRITING_MIN_YEARS
        && !mentions_any(&skills, &SONGWRITING_KEYWORDS)
    {
        out.push(RecommendationCandidate::new(
            "ADV_CREATIVE_SONGWRITING",
            "Start writing your own songs",
            "None of your practice covers songwriting. Set aside one session a week \
             to write, even if it is just a verse and a chorus.",
            RecommendationCategory::Skill,
            RecommendationPriority::Low,
        ));
    }

    if let [genre] = profile.genres.as_slice() {
        let neighbours = compatible_genres(genre);
        if !neighbours.is_empty() {
            out.push(RecommendationCandidate::new(
                "ADV_CREATIVE_GENRE",
                "Borrow from neighbouring genres",
                format!(
                    "Fans of {} often also follow {}. Learning a few songs from those \
                     styles widens the bills you can join.",
                    genre.trim().to_lowercase(),
                    neighbours.join(", ")
                ),
                RecommendationCategory::Skill,
                RecommendationPriority::Low,
            ));
        }
    }
}

fn business_development(
    profile: &MusicianProfile,
    context: &RecommendationContext,
    out: &mut Vec<RecommendationCandidate>,
) {
    if profile.shows.len() >= BUSINESS_MIN_SHOWS
        && context.career_stage >= CareerStage::Intermediate
        && !profile.uses_marketing(marketing::WEBSITE)
    {
        out.push(
            RecommendationCandidate::new(
                "ADV_BUSINESS_BRAND",
                "Package yourself for bookers",
                "Put together an electronic press kit: photos, a short bio, live \
                 video, and past venues on one shareable page.",
                RecommendationCategory::Marketing,
                RecommendationPriority::Medium,
            )
            .tagged(RelevanceTags::REVENUE_FOCUSED),
        );
    }

    let has_financial_goal = profile
        .goals
        .iter()
        .any(|goal| goal.goal_type == GoalType::Financial);
    if context.financial_status != FinancialStatus::Starting && !has_financial_goal {
        out.push(
            RecommendationCandidate::new(
                "ADV_BUSINESS_PLANNING",
                "Treat your music like a business",
                "You are earning real money now. Track income and expenses, set an \
                 annual revenue goal, and put aside money for taxes.",
                RecommendationCategory::Marketing,
                RecommendationPriority::Medium,
            )
            .tagged(RelevanceTags::REVENUE_FOCUSED),
        );
    }
}

fn seasonal_timing(profile: &MusicianProfile, out: &mut Vec<RecommendationCandidate>) {
    if profile.shows.len() < MIN_SHOWS {
        return;
    }

    out.push(
        RecommendationCandidate::new(
            "ADV_SEASONAL_HOLIDAY",
            "Book holiday-season gigs early",
            "Holiday parties and seasonal events book out weeks ahead. Put together \
             a seasonal set and pitch corporate and private clients now.",
            RecommendationCategory::Performance,
            RecommendationPriority::Low,
        )
        .tagged(RelevanceTags::HOLIDAY_SEASON),
    );

    let plays_festivals = profile
        .shows
        .iter()
        .any(|show| show.venue_type == VenueType::Festival);
    if !plays_festivals {
        out.push(
            RecommendationCandidate::new(
                "ADV_SEASONAL_SUMMER",
                "Apply for summer festivals",
                "You have not played a festival yet. Summer lineups fill from spring \
                 applications; send your press kit to regional festivals.",
                RecommendationCategory::Performance,
                RecommendationPriority::Low,
            )
            .tagged(RelevanceTags::SUMMER_SEASON),
        );
    }
}

fn audience_engagement(
    profile: &MusicianProfile,
    summary: &ActivitySummary,
    out: &mut Vec<RecommendationCandidate>,
) {
    if summary.show_count > 0
        && summary.average_audience >= audience::MAILING_LIST_AUDIENCE
        && !profile.uses_marketing(marketing::MAILING)
    {
        out.push(RecommendationCandidate::new(
            "ADV_AUDIENCE_CAPTURE",
            "Capture contacts from your crowds",
            format!(
                "Around {:.0} people see each show, but you have no mailing list. \
                 Collect emails at the door and follow up within a day.",
                summary.average_audience
            ),
            RecommendationCategory::Marketing,
            RecommendationPriority::Medium,
        ));
    }
}

fn technical_skill(profile: &MusicianProfile, out: &mut Vec<RecommendationCandidate>) {
    if profile.practice_log.is_empty() {
        return;
    }

    if !mentions_any(&practiced_topics(profile), &TECHNIQUE_KEYWORDS) {
        out.push(
            RecommendationCandidate::new(
                "ADV_SKILL_TECHNIQUE",
                "Make room for technique",
                "Your practice skips dedicated technique work. Ten minutes of scales or \
                 exercises at the start of each session pays off everywhere else.",
                RecommendationCategory::Skill,
                RecommendationPriority::Low,
            )
            .tagged(RelevanceTags::SKILL_INTENSIVE),
        );
    }
}

/// Lower-cased focus areas and skills across every practice session
fn practiced_topics(profile: &MusicianProfile) -> HashSet<String> {
    profile
        .practice_log
        .iter()
        .flat_map(|session| session.focus_areas.iter().chain(&session.skills_worked_on))
        .map(|topic| topic.trim().to_lowercase())
        .collect()
}

fn mentions_any(topics: &HashSet<String>, keywords: &[&str]) -> bool {
    topics
        .iter()
        .any(|topic| keywords.iter().any(|keyword| topic.contains(keyword)))
}
