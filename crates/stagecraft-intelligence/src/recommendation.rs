// ABOUTME: Recommendation output types: flat record, tagged candidate, weighted variant
// ABOUTME: Defines category and priority enums shared by rules, generators, and ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use serde::{Deserialize, Serialize};

use crate::tags::RelevanceTags;

/// Broad area a recommendation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    /// Promotion and audience growth
    Marketing,
    /// Live shows
    Performance,
    /// Relationships with venues, bookers, and other musicians
    Networking,
    /// Musicianship and practice
    Skill,
}

/// How urgent a recommendation is before contextual weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Act on this first
    High,
    /// Worth doing soon
    Medium,
    /// Nice to have
    Low,
}

/// A recommendation as rendered or stored by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable identifier, unique across the rule catalog and all generators
    pub id: String,
    /// Short headline
    pub title: String,
    /// Actionable detail
    pub description: String,
    /// Broad area
    pub category: RecommendationCategory,
    /// Urgency before weighting
    pub priority: RecommendationPriority,
}

/// A recommendation plus the relevance facets its creator declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCandidate {
    /// The recommendation itself
    pub recommendation: Recommendation,
    /// Facets selecting weighting curves
    pub tags: RelevanceTags,
}

impl RecommendationCandidate {
    /// Create an untagged candidate
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: RecommendationCategory,
        priority: RecommendationPriority,
    ) -> Self {
        Self {
            recommendation: Recommendation {
                id: id.into(),
                title: title.into(),
                description: description.into(),
                category,
                priority,
            },
            tags: RelevanceTags::empty(),
        }
    }

    /// Attach relevance facets
    #[must_use]
    pub const fn tagged(mut self, tags: RelevanceTags) -> Self {
        self.tags = tags;
        self
    }

    /// Candidate id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.recommendation.id
    }
}

/// Internal ranking view of a candidate
///
/// The score and factor list depend on the current date through seasonal
/// weighting, so they are diagnostics rather than stable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedRecommendation {
    /// The recommendation being ranked
    #[serde(flatten)]
    pub recommendation: Recommendation,
    /// Facets that selected the weighting curves
    pub tags: RelevanceTags,
    /// Base priority score times every contextual multiplier
    pub weighted_score: f64,
    /// Human-readable description of each multiplier that applied
    pub relevance_factors: Vec<String>,
}

impl From<WeightedRecommendation> for Recommendation {
    fn from(weighted: WeightedRecommendation) -> Self {
        weighted.recommendation
    }
}
