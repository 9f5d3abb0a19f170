// ABOUTME: Core types and constants for the Stagecraft musician career tracker
// ABOUTME: Foundation crate with the profile data model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

#![deny(unsafe_code)]

//! # Stagecraft Core
//!
//! Foundation crate providing the shared data model for the Stagecraft musician
//! career tracker. This crate changes rarely so the analysis crates on top of it
//! benefit from incremental compilation.
//!
//! ## Modules
//!
//! - **models**: `MusicianProfile` and the activity records it aggregates
//! - **errors**: `AppError`, `ErrorCode`, and `AppResult` for the outer surfaces
//! - **constants**: Application-wide constants organized by domain

/// Error handling for profile loading and other outer surfaces
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Musician profile and activity record models
pub mod models;
