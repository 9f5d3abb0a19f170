// ABOUTME: Dynamic recommendation generators, one per activity domain
// ABOUTME: Defines the generator trait, its shared input, and the fixed default run order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! # Dynamic Generators
//!
//! Each generator inspects the whole profile, returns nothing when the
//! collection it needs is empty, and prefixes its ids with its own domain so
//! two generators can never emit the same id. Generators share no mutable
//! state and may run in any order, but the engine runs them in
//! [`default_generators`] order because first occurrence wins deduplication.

mod advanced;
mod band;
mod goals;
mod industry;
mod performance;
mod practice;
mod recording;
mod setlist;

pub use advanced::AdvancedGenerator;
pub use band::BandGenerator;
pub use goals::GoalGenerator;
pub use industry::IndustryBenchmarkGenerator;
pub use performance::PerformanceGenerator;
pub use practice::PracticeGenerator;
pub use recording::RecordingGenerator;
pub use setlist::SetListGenerator;

use chrono::{DateTime, Utc};
use stagecraft_core::models::MusicianProfile;

use crate::analytics::ActivitySummary;
use crate::context::RecommendationContext;
use crate::recommendation::RecommendationCandidate;

/// Everything a generator may read
#[derive(Debug, Clone, Copy)]
pub struct GeneratorInput<'a> {
    /// The profile under evaluation
    pub profile: &'a MusicianProfile,
    /// The user's classification
    pub context: &'a RecommendationContext,
    /// Precomputed totals over the profile
    pub summary: &'a ActivitySummary,
    /// The evaluation instant
    pub now: DateTime<Utc>,
}

/// A source of candidates for one activity domain
pub trait RecommendationGenerator: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce zero or more candidates
    fn generate(&self, input: &GeneratorInput<'_>) -> Vec<RecommendationCandidate>;
}

/// The built-in generators in their fixed run order
#[must_use]
pub fn default_generators() -> Vec<Box<dyn RecommendationGenerator>> {
    vec![
        Box::new(PerformanceGenerator),
        Box::new(PracticeGenerator),
        Box::new(GoalGenerator),
        Box::new(RecordingGenerator),
        Box::new(BandGenerator),
        Box::new(SetListGenerator),
        Box::new(IndustryBenchmarkGenerator),
        Box::new(AdvancedGenerator),
    ]
}
