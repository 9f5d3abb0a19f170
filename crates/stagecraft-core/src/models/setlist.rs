// ABOUTME: Set list model with ordered songs, durations, and originals flag
// ABOUTME: Shows reference set lists by id to track rotation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in a set list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetListSong {
    /// Song title
    pub title: String,
    /// Length in minutes
    #[serde(default)]
    pub duration_minutes: f64,
    /// Whether the song is an original composition rather than a cover
    #[serde(default)]
    pub is_original: bool,
}

/// A saved set list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetList {
    /// Set list identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Songs in play order
    #[serde(default)]
    pub songs: Vec<SetListSong>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl SetList {
    /// Sum of song durations in minutes
    #[must_use]
    pub fn total_duration_minutes(&self) -> f64 {
        self.songs.iter().map(|song| song.duration_minutes).sum()
    }

    /// Fraction of songs that are originals; zero for an empty list
    #[must_use]
    pub fn original_ratio(&self) -> f64 {
        if self.songs.is_empty() {
            return 0.0;
        }
        let originals = self.songs.iter().filter(|song| song.is_original).count();
        originals as f64 / self.songs.len() as f64
    }
}
