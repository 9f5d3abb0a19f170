// ABOUTME: Main library entry point for the Stagecraft musician career platform
// ABOUTME: Re-exports the workspace crates and provides logging and profile loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

#![deny(unsafe_code)]

//! # Stagecraft
//!
//! Personalized career recommendations for working musicians. Given everything
//! a musician has logged (shows, practice, goals, recordings, band roster, and
//! set lists), the engine returns a short ranked list of next steps.
//!
//! ## Architecture
//!
//! - **`stagecraft_core`**: the profile data model, errors, and constants
//! - **`stagecraft_intelligence`**: analytics, rules, generators,
//!   contextual weighting, and the recommendation engine
//! - **logging**: `tracing-subscriber` setup driven by the environment
//! - **`profile_source`**: loading profiles from storage
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use stagecraft::stagecraft_core::models::{MusicianProfile, PerformanceFrequency};
//! use stagecraft::stagecraft_intelligence::RecommendationEngine;
//!
//! let mut profile = MusicianProfile::new("user-1", "Bass");
//! profile.performance_frequency = PerformanceFrequency::Monthly;
//!
//! let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
//! let engine = RecommendationEngine::new();
//! for rec in engine.generate_recommendations(&profile, now) {
//!     println!("{} [{:?}] {}", rec.id, rec.priority, rec.title);
//! }
//! ```

/// Data model, errors, and constants
pub use stagecraft_core;

/// Recommendation engine and analytics
pub use stagecraft_intelligence;

/// Structured logging setup
pub mod logging;

/// Profile loading boundary
pub mod profile_source;
