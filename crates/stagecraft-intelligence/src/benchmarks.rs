// ABOUTME: Industry reference tables for working musicians keyed by career stage and venue
// ABOUTME: Typical fees, audiences, practice and show norms, genre instrumentation and pairings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Industry benchmark tables
//!
//! Pure data: typical figures for independent musicians in North American and
//! European club circuits. Generators compare a user's history against these
//! numbers; nothing here inspects a profile.

use stagecraft_core::models::VenueType;

use crate::context::CareerStage;

/// Per-show fee norms (USD)
pub mod fees {
    /// A show paying below this share of the benchmark fee is considered underpaid
    pub const UNDERPAID_RATIO: f64 = 0.7;

    /// Shows at one venue type needed before comparing its average fee
    pub const MIN_SHOWS_PER_VENUE_TYPE: usize = 2;

    /// Average fee below which merch becomes the main revenue lever
    pub const MERCH_FEE_THRESHOLD: f64 = 100.0;
}

/// Audience size norms
pub mod audience {
    /// Average audience below this share of the typical size triggers growth advice
    pub const UNDERSIZED_RATIO: f64 = 0.5;

    /// Average audience considered small regardless of stage
    pub const SMALL_AUDIENCE: f64 = 20.0;

    /// Average audience large enough to justify a mailing list signup at the door
    pub const MAILING_LIST_AUDIENCE: f64 = 50.0;
}

/// Practice time norms
pub mod practice {
    /// Weekly practice above this multiple of the stage maximum risks burnout
    pub const OVERTRAINING_MULTIPLE: f64 = 1.5;

    /// Weekly practice below this share of the stage minimum lags the industry
    pub const LAGGING_RATIO: f64 = 0.5;
}

/// Show frequency norms
pub mod shows {
    /// Monthly show rate below this share of the stage norm lags the industry
    pub const LAGGING_RATIO: f64 = 0.5;
}

/// Recording economics norms
pub mod recording {
    /// Lifetime plays per song below which promotion is recommended
    pub const MIN_PLAYS_PER_SONG: f64 = 100.0;

    /// A song with this multiple of the catalog's average plays is a standout
    pub const STANDOUT_PLAYS_MULTIPLE: f64 = 3.0;

    /// Days since the last session after which the catalog is stale
    pub const STALE_CATALOG_DAYS: i64 = 365;

    /// Cost per song above this multiple of the stage norm is expensive
    pub const EXPENSIVE_COST_MULTIPLE: f64 = 1.5;

    /// Recording revenue share below which streaming needs attention
    pub const LOW_STREAMING_SHARE: f64 = 0.1;
}

/// Weekly practice range in minutes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PracticeNorm {
    /// Lower end of the typical range
    pub min_minutes: f64,
    /// Upper end of the typical range
    pub max_minutes: f64,
}

/// Typical fee for one show at the given venue type and career stage
#[must_use]
pub const fn typical_fee(stage: CareerStage, venue: VenueType) -> f64 {
    let by_stage: [f64; 4] = match venue {
        VenueType::Bar => [50.0, 150.0, 300.0, 600.0],
        VenueType::Restaurant => [75.0, 150.0, 250.0, 500.0],
        VenueType::ConcertHall => [100.0, 400.0, 1200.0, 5000.0],
        VenueType::Festival => [100.0, 500.0, 2000.0, 10000.0],
        VenueType::PrivateEvent => [150.0, 400.0, 800.0, 2000.0],
        VenueType::Other => [50.0, 150.0, 300.0, 800.0],
    };
    by_stage[stage.index()]
}

/// Typical audience for one show at the given venue type and career stage
#[must_use]
pub const fn typical_audience(stage: CareerStage, venue: VenueType) -> u32 {
    let by_stage: [u32; 4] = match venue {
        VenueType::Bar => [15, 40, 80, 150],
        VenueType::Restaurant => [15, 30, 50, 80],
        VenueType::ConcertHall => [50, 150, 500, 1500],
        VenueType::Festival => [100, 300, 1000, 5000],
        VenueType::PrivateEvent => [30, 60, 100, 150],
        VenueType::Other => [20, 50, 100, 300],
    };
    by_stage[stage.index()]
}

/// Typical weekly practice range for a career stage
#[must_use]
pub const fn weekly_practice_minutes(stage: CareerStage) -> PracticeNorm {
    let (min_minutes, max_minutes) = match stage {
        CareerStage::Beginner => (150.0, 420.0),
        CareerStage::Intermediate => (240.0, 600.0),
        CareerStage::Advanced => (300.0, 900.0),
        CareerStage::Professional => (420.0, 1200.0),
    };
    PracticeNorm {
        min_minutes,
        max_minutes,
    }
}

/// Typical number of shows per month for a career stage
#[must_use]
pub const fn monthly_show_norm(stage: CareerStage) -> f64 {
    match stage {
        CareerStage::Beginner => 0.5,
        CareerStage::Intermediate => 2.0,
        CareerStage::Advanced => 4.0,
        CareerStage::Professional => 8.0,
    }
}

/// Typical studio cost per finished song for a career stage
#[must_use]
pub const fn recording_cost_per_song(stage: CareerStage) -> f64 {
    match stage {
        CareerStage::Beginner => 100.0,
        CareerStage::Intermediate => 250.0,
        CareerStage::Advanced => 500.0,
        CareerStage::Professional => 1000.0,
    }
}

/// Core instrumentation of a genre, lower-case
///
/// Unknown genres return an empty slice.
#[must_use]
pub fn genre_instrumentation(genre: &str) -> &'static [&'static str] {
    match normalize_genre(genre).as_str() {
        "rock" => &["guitar", "bass", "drums", "vocals"],
        "jazz" => &["piano", "bass", "drums", "saxophone"],
        "blues" => &["guitar", "bass", "drums", "harmonica"],
        "pop" => &["vocals", "keyboard", "guitar", "bass", "drums"],
        "folk" => &["guitar", "vocals", "violin", "banjo"],
        "country" => &["guitar", "bass", "drums", "fiddle"],
        "classical" => &["piano", "violin", "cello"],
        "hip-hop" => &["vocals", "turntables", "keyboard"],
        "electronic" => &["synthesizer", "drums"],
        "funk" => &["bass", "drums", "guitar", "keyboard", "horns"],
        _ => &[],
    }
}

/// Genres that share audiences and venues with the given genre
///
/// Unknown genres return an empty slice.
#[must_use]
pub fn compatible_genres(genre: &str) -> &'static [&'static str] {
    match normalize_genre(genre).as_str() {
        "rock" => &["blues", "indie", "punk"],
        "jazz" => &["blues", "funk", "soul"],
        "blues" => &["rock", "jazz", "soul"],
        "pop" => &["r&b", "electronic", "indie"],
        "folk" => &["country", "bluegrass", "indie"],
        "country" => &["folk", "bluegrass", "rock"],
        "classical" => &["film score", "jazz"],
        "hip-hop" => &["r&b", "electronic", "funk"],
        "electronic" => &["pop", "hip-hop"],
        "funk" => &["soul", "jazz", "hip-hop"],
        _ => &[],
    }
}

fn normalize_genre(genre: &str) -> String {
    let lower = genre.trim().to_lowercase();
    match lower.as_str() {
        "hip hop" | "hiphop" | "rap" => "hip-hop".to_owned(),
        "edm" => "electronic".to_owned(),
        _ => lower,
    }
}
