// ABOUTME: Practice session record with focus areas and skills worked on
// ABOUTME: Sessions feed practice-consistency analysis and skill recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged practice session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSession {
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Length in minutes
    #[serde(default)]
    pub duration_minutes: u32,
    /// Broad focus areas, e.g. "technique", "repertoire"
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Specific skills, e.g. "sweep picking", "sight reading"
    #[serde(default)]
    pub skills_worked_on: Vec<String>,
    /// Band members present; non-empty means this was a rehearsal
    #[serde(default)]
    pub present_band_member_ids: Vec<String>,
}

impl PracticeSession {
    /// Create a solo session with no tagged focus areas or skills
    #[must_use]
    pub const fn new(date: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            date,
            duration_minutes,
            focus_areas: Vec::new(),
            skills_worked_on: Vec::new(),
            present_band_member_ids: Vec::new(),
        }
    }

    /// Whether any band member attended
    #[must_use]
    pub fn is_rehearsal(&self) -> bool {
        !self.present_band_member_ids.is_empty()
    }
}
