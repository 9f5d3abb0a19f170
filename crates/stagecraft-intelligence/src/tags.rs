// ABOUTME: Relevance facet flags attached to recommendation candidates at creation time
// ABOUTME: The weighting engine switches on these flags to pick multiplier curves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! # Relevance Tags
//!
//! Every rule and generator declares which weighting curves apply to the
//! candidates it creates. Recommendation ids follow a naming convention that
//! mirrors these flags (`PRACTICE`/`SKILL` ids are skill-intensive, `PERF`/`VENUE`
//! ids are performance-intensive, `REV_OPT`/`BUSINESS` ids are revenue-focused,
//! `REC_` ids are recording work), but ranking never inspects id strings.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Facets that select contextual weighting curves for a candidate
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RelevanceTags: u8 {
        /// Needs regular practice time; weighted by recent activity level
        const SKILL_INTENSIVE = 0b0000_0001;
        /// Needs stage time; weighted by recent activity level
        const PERFORMANCE_INTENSIVE = 0b0000_0010;
        /// Monetization advice; weighted up as finances mature
        const REVENUE_FOCUSED = 0b0000_0100;
        /// Entry-level advice; weighted up while finances are just starting
        const FOUNDATIONAL = 0b0000_1000;
        /// Studio work; boosted during the winter recording season
        const RECORDING = 0b0001_0000;
        /// Holiday bookings; boosted November through January
        const HOLIDAY_SEASON = 0b0010_0000;
        /// Festival season; boosted June through September
        const SUMMER_SEASON = 0b0100_0000;
    }
}
