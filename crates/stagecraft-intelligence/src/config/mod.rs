// ABOUTME: Recommendation engine configuration loading, environment overrides, and validation
// ABOUTME: Falls back to validated defaults with a warning when overrides are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Engine Configuration
//!
//! The engine never reads configuration on its own: a validated
//! [`RecommendationEngineConfig`] is injected through
//! [`crate::RecommendationEngine::with_config`].
//!
//! # Environment overrides
//!
//! - `STAGECRAFT_MIN_RECOMMENDATIONS`
//! - `STAGECRAFT_MAX_RECOMMENDATIONS`
//! - `STAGECRAFT_FOCUS_MATCH_MULTIPLIER`

/// Configuration error types
pub mod error;
/// Configuration structures and defaults
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::{
    ActivityMultipliers, CareerStageMultipliers, ContextThresholds, FinancialCurve,
    FinancialMultipliers, LevelCurve, PriorityScores, RecommendationEngineConfig,
    RecommendationLimits, SeasonalMultipliers, StageCurve, StageCutoff, WeightingMultipliers,
};

use std::env;
use std::str::FromStr;
use tracing::warn;

/// Environment variable overriding the static-rule minimum
pub const ENV_MIN_RECOMMENDATIONS: &str = "STAGECRAFT_MIN_RECOMMENDATIONS";
/// Environment variable overriding the output maximum
pub const ENV_MAX_RECOMMENDATIONS: &str = "STAGECRAFT_MAX_RECOMMENDATIONS";
/// Environment variable overriding the focus-match multiplier
pub const ENV_FOCUS_MATCH_MULTIPLIER: &str = "STAGECRAFT_FOCUS_MATCH_MULTIPLIER";

impl RecommendationEngineConfig {
    /// Load defaults, apply environment overrides, and validate
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        Self::apply_env_var(
            ENV_MIN_RECOMMENDATIONS,
            &mut config.limits.min_recommendations,
        )?;
        Self::apply_env_var(
            ENV_MAX_RECOMMENDATIONS,
            &mut config.limits.max_recommendations,
        )?;
        Self::apply_env_var(
            ENV_FOCUS_MATCH_MULTIPLIER,
            &mut config.multipliers.focus_match,
        )?;

        config.validate()?;
        Ok(config)
    }

    /// Like [`Self::from_env`], but logs the failure and returns defaults instead
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            warn!("Failed to load recommendation engine config: {e}, using defaults");
            Self::default()
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if limits are inverted, base scores are not strictly
    /// ordered, a multiplier is not a positive finite number, or a threshold pair
    /// is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_recommendations must be at least 1",
            ));
        }
        if self.limits.min_recommendations > self.limits.max_recommendations {
            return Err(ConfigError::InvalidRange(
                "min_recommendations must be <= max_recommendations",
            ));
        }

        let scores = &self.scoring;
        if scores.low <= 0.0 || !scores.high.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "priority scores must be positive and finite",
            ));
        }
        if scores.high <= scores.medium || scores.medium <= scores.low {
            return Err(ConfigError::InvalidRange(
                "priority scores must satisfy high > medium > low",
            ));
        }

        if self
            .multipliers
            .all_values()
            .iter()
            .any(|value| !value.is_finite() || *value <= 0.0)
        {
            return Err(ConfigError::InvalidMultiplier(
                "every multiplier must be a positive finite number",
            ));
        }

        let thresholds = &self.thresholds;
        if thresholds.recent_activity_months == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_activity_months must be at least 1",
            ));
        }
        if thresholds.medium_activity_count > thresholds.high_activity_count {
            return Err(ConfigError::InvalidRange(
                "medium_activity_count must be <= high_activity_count",
            ));
        }
        if thresholds.growing_revenue >= thresholds.established_revenue {
            return Err(ConfigError::InvalidRange(
                "growing_revenue must be < established_revenue",
            ));
        }
        if thresholds.advanced.min_earnings > thresholds.professional.min_earnings
            || thresholds.advanced.min_shows > thresholds.professional.min_shows
            || thresholds.advanced.min_years > thresholds.professional.min_years
        {
            return Err(ConfigError::InvalidRange(
                "advanced stage cutoffs must not exceed professional cutoffs",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }
}
