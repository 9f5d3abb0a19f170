// ABOUTME: Declarative static rule catalog evaluated against primitive profile facts
// ABOUTME: Interpolates the instrument into descriptions and tops up with a fallback rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! # Static Rules
//!
//! A rule is a stable id, a headline, a description template, a category, a
//! priority, relevance tags, and a predicate over [`ProfileFacts`]. The catalog is
//! a plain value: the engine receives it by injection and never reaches for a
//! global table.

mod catalog;

use stagecraft_core::models::{MusicianProfile, PerformanceFrequency};
use std::collections::BTreeSet;

use crate::recommendation::{
    RecommendationCandidate, RecommendationCategory, RecommendationPriority,
};
use crate::tags::RelevanceTags;

/// Placeholder substituted with the lower-cased instrument
pub const INSTRUMENT_PLACEHOLDER: &str = "{instrument}";

/// Rendered in place of an empty instrument
const UNKNOWN_INSTRUMENT: &str = "music";

/// Primitive facts about a profile that static predicates may read
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFacts {
    /// Instrument, trimmed and lower-cased
    pub instrument: String,
    /// Self-reported performance frequency
    pub frequency: PerformanceFrequency,
    /// Crowd-size bucket encoded 1 through 5
    pub crowd_code: u8,
    /// Years of experience
    pub years: f64,
    /// Whether the musician does no marketing at all
    pub no_marketing: bool,
    marketing: BTreeSet<String>,
}

impl ProfileFacts {
    /// Extract the facts from a profile
    #[must_use]
    pub fn from_profile(profile: &MusicianProfile) -> Self {
        Self {
            instrument: profile.instrument.trim().to_lowercase(),
            frequency: profile.performance_frequency,
            crowd_code: profile.crowd_size.code(),
            years: profile.years_of_experience,
            no_marketing: profile.has_no_marketing(),
            marketing: profile
                .marketing_efforts
                .iter()
                .map(|effort| effort.trim().to_lowercase())
                .collect(),
        }
    }

    /// Whether a marketing channel is in use
    #[must_use]
    pub fn uses(&self, channel: &str) -> bool {
        self.marketing.contains(channel)
    }

    /// Instrument as rendered into descriptions
    #[must_use]
    pub fn instrument_label(&self) -> &str {
        if self.instrument.is_empty() {
            UNKNOWN_INSTRUMENT
        } else {
            &self.instrument
        }
    }
}

/// Predicate deciding whether a static rule applies
pub type RulePredicate = fn(&ProfileFacts) -> bool;

/// One declarative condition-to-recommendation rule
#[derive(Debug, Clone)]
pub struct StaticRule {
    /// Stable id, unique across the catalog and every generator
    pub id: &'static str,
    /// Headline
    pub title: &'static str,
    /// Description, may contain [`INSTRUMENT_PLACEHOLDER`]
    pub description: &'static str,
    /// Broad area
    pub category: RecommendationCategory,
    /// Urgency
    pub priority: RecommendationPriority,
    /// Weighting facets
    pub tags: RelevanceTags,
    /// Applicability test
    pub predicate: RulePredicate,
}

impl StaticRule {
    /// Whether the rule applies to the facts
    #[must_use]
    pub fn matches(&self, facts: &ProfileFacts) -> bool {
        (self.predicate)(facts)
    }

    /// Render the rule into a candidate for the given facts
    #[must_use]
    pub fn render(&self, facts: &ProfileFacts) -> RecommendationCandidate {
        RecommendationCandidate::new(
            self.id,
            self.title,
            self.description
                .replace(INSTRUMENT_PLACEHOLDER, facts.instrument_label()),
            self.category,
            self.priority,
        )
        .tagged(self.tags)
    }
}

/// Ordered static rules plus the fallback used to reach the minimum
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<StaticRule>,
    fallback: StaticRule,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new(catalog::basic_rules(), catalog::fallback_rule())
    }
}

impl RuleCatalog {
    /// Build a catalog from explicit rules
    #[must_use]
    pub const fn new(rules: Vec<StaticRule>, fallback: StaticRule) -> Self {
        Self { rules, fallback }
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[StaticRule] {
        &self.rules
    }

    /// The fallback rule
    #[must_use]
    pub const fn fallback(&self) -> &StaticRule {
        &self.fallback
    }

    /// Evaluate every rule in order
    ///
    /// When fewer than `min_recommendations` rules match, a single fallback
    /// recommendation is appended.
    #[must_use]
    pub fn evaluate(
        &self,
        facts: &ProfileFacts,
        min_recommendations: usize,
    ) -> Vec<RecommendationCandidate> {
        let mut matched: Vec<RecommendationCandidate> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(facts))
            .map(|rule| rule.render(facts))
            .collect();

        if matched.len() < min_recommendations {
            matched.push(self.fallback.render(facts));
        }
        matched
    }
}
