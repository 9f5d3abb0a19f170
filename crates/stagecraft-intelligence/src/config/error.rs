// ABOUTME: Configuration error types for recommendation engine settings
// ABOUTME: Defines error variants for invalid ranges, unparsable overrides, and bad multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Configuration error types for engine validation.

use stagecraft_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two related settings are in the wrong order (e.g. min above max)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A single setting is outside its valid domain
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A weighting multiplier is zero, negative, or not finite
    #[error("Invalid multiplier: {0}")]
    InvalidMultiplier(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}
