// ABOUTME: Recommendation orchestrator composing static rules, generators, and weighting
// ABOUTME: Public entry point turning one profile and an instant into a bounded ranked list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Recommendation engine
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use stagecraft_core::models::MusicianProfile;
//! use stagecraft_intelligence::RecommendationEngine;
//!
//! let profile = MusicianProfile::new("user-1", "Guitar");
//! let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
//! let recommendations = RecommendationEngine::new().generate_recommendations(&profile, now);
//! assert!(!recommendations.is_empty());
//! ```

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use stagecraft_core::models::MusicianProfile;
use std::fmt;
use tracing::debug;

use crate::analytics::summarize_activity;
use crate::config::RecommendationEngineConfig;
use crate::context::RecommendationContext;
use crate::generators::{default_generators, GeneratorInput, RecommendationGenerator};
use crate::recommendation::{Recommendation, WeightedRecommendation};
use crate::rules::{ProfileFacts, RuleCatalog};
use crate::weighting::PersonalizationEngine;

/// Orchestrates context building, candidate generation, and ranking
///
/// Configuration and the rule catalog are owned values injected at
/// construction; the engine holds no other state and is safe to share across
/// threads.
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
    catalog: RuleCatalog,
    generators: Vec<Box<dyn RecommendationGenerator>>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("config", &self.config)
            .field("rules", &self.catalog.rules().len())
            .field(
                "generators",
                &self.generators.iter().map(|g| g.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl RecommendationEngine {
    /// Create an engine with default configuration, catalog, and generators
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RecommendationEngineConfig::default())
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(config: RecommendationEngineConfig) -> Self {
        Self {
            config,
            catalog: RuleCatalog::default(),
            generators: default_generators(),
        }
    }

    /// Replace the static rule catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the dynamic generators; they run in the order given
    #[must_use]
    pub fn with_generators(mut self, generators: Vec<Box<dyn RecommendationGenerator>>) -> Self {
        self.generators = generators;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Active rule catalog
    #[must_use]
    pub const fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Classify the user as the weighting step sees them
    #[must_use]
    pub fn context(&self, profile: &MusicianProfile, now: DateTime<Utc>) -> RecommendationContext {
        let summary = summarize_activity(profile);
        RecommendationContext::build(profile, &summary, now, &self.config.thresholds)
    }

    /// Ranked recommendations for one profile at the given instant
    ///
    /// Never empty for a structurally valid profile and never longer than the
    /// configured maximum.
    #[must_use]
    pub fn generate_recommendations(
        &self,
        profile: &MusicianProfile,
        now: DateTime<Utc>,
    ) -> Vec<Recommendation> {
        self.rank(profile, now)
            .into_iter()
            .map(Recommendation::from)
            .collect()
    }

    /// Same pipeline as [`Self::generate_recommendations`], keeping scores and factors
    ///
    /// When every candidate is dismissed the fallback is returned, even if the
    /// fallback id is itself dismissed.
    #[must_use]
    pub fn rank(
        &self,
        profile: &MusicianProfile,
        now: DateTime<Utc>,
    ) -> Vec<WeightedRecommendation> {
        let summary = summarize_activity(profile);
        let context =
            RecommendationContext::build(profile, &summary, now, &self.config.thresholds);
        let facts = ProfileFacts::from_profile(profile);

        let mut candidates = self
            .catalog
            .evaluate(&facts, self.config.limits.min_recommendations);
        debug!(
            profile_id = %profile.id,
            count = candidates.len(),
            "static rules matched"
        );

        let input = GeneratorInput {
            profile,
            context: &context,
            summary: &summary,
            now,
        };
        for generator in &self.generators {
            let generated = generator.generate(&input);
            debug!(
                profile_id = %profile.id,
                generator = generator.name(),
                count = generated.len(),
                "generator produced candidates"
            );
            candidates.extend(generated);
        }

        let weighting = PersonalizationEngine::new(&self.config);
        let mut ranked = weighting.rank(candidates, &context, now);

        // Everything was dismissed; the fallback is shown regardless
        if ranked.is_empty() {
            let fallback = self.catalog.fallback().render(&facts);
            ranked.push(weighting.weigh(fallback, &context, now));
        }

        debug!(
            profile_id = %profile.id,
            career_stage = context.career_stage.as_str(),
            returned = ranked.len(),
            "recommendations ranked"
        );
        ranked
    }

    /// Rank many independent profiles in parallel
    ///
    /// Output order matches input order.
    #[must_use]
    pub fn generate_batch(
        &self,
        profiles: &[MusicianProfile],
        now: DateTime<Utc>,
    ) -> Vec<Vec<Recommendation>> {
        profiles
            .par_iter()
            .map(|profile| self.generate_recommendations(profile, now))
            .collect()
    }
}

/// Ranked recommendations using the default engine
#[must_use]
pub fn generate_recommendations(
    profile: &MusicianProfile,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    RecommendationEngine::new().generate_recommendations(profile, now)
}
