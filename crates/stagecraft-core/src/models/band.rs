// ABOUTME: Band roster member model
// ABOUTME: Used for band composition and rehearsal recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member of the musician's band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandMember {
    /// Member identifier, referenced from shows and rehearsals
    pub id: String,
    /// Display name
    pub name: String,
    /// Instrument played
    pub instrument: String,
    /// Years spent playing
    #[serde(default)]
    pub years_experience: f64,
    /// When the member joined
    pub join_date: DateTime<Utc>,
}
