// ABOUTME: Musician career intelligence crate root
// ABOUTME: Analytics, benchmark tables, rule catalog, generators, weighting, and the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

#![deny(unsafe_code)]

//! # Stagecraft Intelligence
//!
//! Turns a musician's accumulated activity history into a short, ranked list of
//! actionable recommendations.
//!
//! The pipeline, leaves first:
//!
//! - **benchmarks**: static reference tables (fees, audiences, practice and show norms)
//! - **analytics**: pure statistics over shows and practice sessions
//! - **rules**: the declarative static rule catalog with its fallback
//! - **generators**: one dynamic generator per activity domain
//! - **context**: classification of the user (career stage, focus areas, activity, finances)
//! - **weighting**: contextual scoring, deduplication, ordering, truncation
//! - **`recommendation_engine`**: the orchestrator tying it together
//!
//! Everything is synchronous and side-effect free. The current date is always an
//! explicit parameter so results are reproducible.

/// Descriptive statistics over performance and practice history
pub mod analytics;

/// Reference tables for fees, audiences, and practice or show norms
pub mod benchmarks;

/// Engine configuration with environment overrides and validation
pub mod config;

/// User classification used to weight candidates
pub mod context;

/// Dynamic per-domain recommendation generators
pub mod generators;

/// Recommendation output types
pub mod recommendation;

/// Orchestrator composing rules, generators, and weighting
pub mod recommendation_engine;

/// Static rule catalog
pub mod rules;

/// Relevance facets attached to every candidate
pub mod tags;

/// Contextual scoring and ranking
pub mod weighting;

pub use analytics::{
    analyze_performance_trends, analyze_practice_habits, average_venue_score, summarize_activity,
    venue_score, ActivitySummary, FrequencyTrend, PerformanceTrends, PracticeAdjustment,
    PracticeConsistency, PracticeHabits, VenueProgression,
};
pub use config::{ConfigError, RecommendationEngineConfig};
pub use context::{ActivityLevel, CareerStage, FinancialStatus, FocusArea, RecommendationContext};
pub use generators::{default_generators, GeneratorInput, RecommendationGenerator};
pub use recommendation::{
    Recommendation, RecommendationCandidate, RecommendationCategory, RecommendationPriority,
    WeightedRecommendation,
};
pub use recommendation_engine::{generate_recommendations, RecommendationEngine};
pub use rules::{ProfileFacts, RuleCatalog, StaticRule};
pub use tags::RelevanceTags;
pub use weighting::PersonalizationEngine;
