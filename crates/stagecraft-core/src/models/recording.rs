// ABOUTME: Studio recording session with per-song streaming plays and revenue
// ABOUTME: Session totals are derived from the songs rather than stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One song produced during a recording session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedSong {
    /// Song title
    pub title: String,
    /// Lifetime plays across platforms
    #[serde(default)]
    pub plays: u64,
    /// Lifetime revenue
    #[serde(default)]
    pub revenue: f64,
}

/// One studio recording session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSession {
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Studio or location
    #[serde(default)]
    pub location: String,
    /// Total session cost
    #[serde(default)]
    pub cost: f64,
    /// Songs recorded
    #[serde(default)]
    pub songs: Vec<RecordedSong>,
}

impl RecordingSession {
    /// Sum of plays across all songs
    #[must_use]
    pub fn total_plays(&self) -> u64 {
        self.songs.iter().map(|song| song.plays).sum()
    }

    /// Sum of revenue across all songs
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.songs.iter().map(|song| song.revenue).sum()
    }
}
