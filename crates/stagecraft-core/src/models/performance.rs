// ABOUTME: Live performance record and venue type enumeration
// ABOUTME: Each record captures one show with audience, duration, and payment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of venue a show was played at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
    /// Bar or pub
    Bar,
    /// Restaurant or cafe
    Restaurant,
    /// Dedicated concert hall or theatre
    ConcertHall,
    /// Music festival
    Festival,
    /// Wedding, corporate, or other private booking
    PrivateEvent,
    /// Anything else
    Other,
}

impl VenueType {
    /// All venue types in declaration order
    pub const ALL: [Self; 6] = [
        Self::Bar,
        Self::Restaurant,
        Self::ConcertHall,
        Self::Festival,
        Self::PrivateEvent,
        Self::Other,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Restaurant => "restaurant",
            Self::ConcertHall => "concert hall",
            Self::Festival => "festival",
            Self::PrivateEvent => "private event",
            Self::Other => "other",
        }
    }

    /// Upper-case token used inside recommendation ids
    #[must_use]
    pub const fn id_token(self) -> &'static str {
        match self {
            Self::Bar => "BAR",
            Self::Restaurant => "RESTAURANT",
            Self::ConcertHall => "CONCERT_HALL",
            Self::Festival => "FESTIVAL",
            Self::PrivateEvent => "PRIVATE_EVENT",
            Self::Other => "OTHER",
        }
    }
}

/// One logged live performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    /// When the show took place
    pub date: DateTime<Utc>,
    /// Venue name
    #[serde(default)]
    pub venue_name: String,
    /// Venue classification
    pub venue_type: VenueType,
    /// Number of people in attendance
    #[serde(default)]
    pub audience_size: u32,
    /// Length of the set in minutes
    #[serde(default)]
    pub duration_minutes: u32,
    /// Fee received; zero for unpaid shows
    #[serde(default)]
    pub payment: f64,
    /// Set list played, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setlist_id: Option<String>,
    /// Band members present at the show
    #[serde(default)]
    pub present_band_member_ids: Vec<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PerformanceRecord {
    /// Create a record with the required fields; optional fields start empty
    #[must_use]
    pub fn new(
        date: DateTime<Utc>,
        venue_type: VenueType,
        audience_size: u32,
        duration_minutes: u32,
        payment: f64,
    ) -> Self {
        Self {
            date,
            venue_name: String::new(),
            venue_type,
            audience_size,
            duration_minutes,
            payment,
            setlist_id: None,
            present_band_member_ids: Vec::new(),
            notes: None,
        }
    }
}
