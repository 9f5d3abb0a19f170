// ABOUTME: Core data models for the Stagecraft musician career tracker
// ABOUTME: Re-exports MusicianProfile and the activity records it aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! # Data Models
//!
//! `MusicianProfile` is the root aggregate. Every collection it owns is
//! deserialized with `#[serde(default)]`, so a profile missing `shows`,
//! `practiceLog`, or any other list arrives as an empty `Vec` and downstream
//! code never has to guard against absent collections.
//!
//! Field names follow the camelCase shape the browser storage layer writes.

mod band;
mod goal;
mod performance;
mod practice;
mod profile;
mod recording;
mod setlist;

pub use band::BandMember;
pub use goal::{Goal, GoalStatus, GoalType};
pub use performance::{PerformanceRecord, VenueType};
pub use practice::PracticeSession;
pub use profile::{Achievement, CrowdSize, MusicianProfile, PerformanceFrequency, Preferences};
pub use recording::{RecordedSong, RecordingSession};
pub use setlist::{SetList, SetListSong};
