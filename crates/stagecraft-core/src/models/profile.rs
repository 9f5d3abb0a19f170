// ABOUTME: Musician profile root aggregate with enums for frequency and crowd size
// ABOUTME: Owns every activity collection and the user's recommendation preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{BandMember, Goal, PerformanceRecord, PracticeSession, RecordingSession, SetList};
use crate::constants::marketing;

/// How often the musician performs live, as self-reported at onboarding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceFrequency {
    /// Has never performed live
    #[default]
    Never,
    /// About once a year
    Yearly,
    /// About once a month
    Monthly,
    /// About once a week
    Weekly,
    /// Several times a week
    Multiple,
}

impl PerformanceFrequency {
    /// Whether this frequency counts as "rarely performs"
    #[must_use]
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Never | Self::Yearly)
    }

    /// Whether this frequency counts as a regular gigging schedule
    #[must_use]
    pub const fn is_regular(self) -> bool {
        matches!(self, Self::Weekly | Self::Multiple)
    }
}

/// Typical audience size bucket, as self-reported at onboarding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrowdSize {
    /// 1 to 10 people
    #[default]
    #[serde(rename = "1-10")]
    Tiny,
    /// 10 to 50 people
    #[serde(rename = "10-50")]
    Small,
    /// 50 to 100 people
    #[serde(rename = "50-100")]
    Medium,
    /// 100 to 500 people
    #[serde(rename = "100-500")]
    Large,
    /// More than 500 people
    #[serde(rename = "500+")]
    Massive,
}

impl CrowdSize {
    /// Ordinal encoding of the bucket, 1 (smallest) through 5 (largest)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Tiny => 1,
            Self::Small => 2,
            Self::Medium => 3,
            Self::Large => 4,
            Self::Massive => 5,
        }
    }
}

/// Unlocked achievement, produced by the achievement subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Achievement identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// When the achievement was unlocked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Per-user preferences that influence recommendation output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Recommendation ids the user has dismissed
    #[serde(default)]
    pub dismissed_recommendations: BTreeSet<String>,
}

/// Root aggregate for everything known about one musician
///
/// # Examples
///
/// ```rust
/// use stagecraft_core::models::{MusicianProfile, PerformanceFrequency};
///
/// let mut profile = MusicianProfile::new("user-1", "Guitar");
/// profile.performance_frequency = PerformanceFrequency::Monthly;
/// profile.years_of_experience = 4.0;
/// assert!(profile.shows.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicianProfile {
    /// Profile identifier; filled from the storage key when absent
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Primary instrument, e.g. "Guitar"
    #[serde(default)]
    pub instrument: String,
    /// Self-reported performance frequency
    #[serde(default)]
    pub performance_frequency: PerformanceFrequency,
    /// Self-reported typical crowd size
    #[serde(default)]
    pub crowd_size: CrowdSize,
    /// Years spent playing
    #[serde(default)]
    pub years_of_experience: f64,
    /// Marketing channels in use; may contain the `"none"` sentinel
    #[serde(default)]
    pub marketing_efforts: Vec<String>,
    /// Genre tags
    #[serde(default)]
    pub genres: Vec<String>,
    /// Logged live performances
    #[serde(default)]
    pub shows: Vec<PerformanceRecord>,
    /// Logged practice sessions
    #[serde(default)]
    pub practice_log: Vec<PracticeSession>,
    /// Career goals
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Unlocked achievements
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// Studio recording sessions
    #[serde(default)]
    pub recordings: Vec<RecordingSession>,
    /// Band roster
    #[serde(default)]
    pub band_members: Vec<BandMember>,
    /// Saved set lists
    #[serde(default)]
    pub set_lists: Vec<SetList>,
    /// Recommendation preferences
    #[serde(default)]
    pub preferences: Preferences,
}

impl MusicianProfile {
    /// Create an empty profile for the given instrument
    #[must_use]
    pub fn new(id: impl Into<String>, instrument: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instrument: instrument.into(),
            ..Self::default()
        }
    }

    /// Whether the musician reports doing any marketing at all
    ///
    /// An empty list and a list containing the `"none"` sentinel both count as no marketing.
    #[must_use]
    pub fn has_no_marketing(&self) -> bool {
        self.marketing_efforts.is_empty()
            || self
                .marketing_efforts
                .iter()
                .any(|effort| effort.eq_ignore_ascii_case(marketing::NONE))
    }

    /// Whether a specific marketing channel is in use (case-insensitive)
    #[must_use]
    pub fn uses_marketing(&self, channel: &str) -> bool {
        self.marketing_efforts
            .iter()
            .any(|effort| effort.eq_ignore_ascii_case(channel))
    }
}
