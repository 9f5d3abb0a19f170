// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants shared by the engine, the CLI, and the profile source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than living in one flat list.

/// Recommendation output bounds
pub mod limits {
    /// Minimum number of static-rule recommendations before the fallback tops up
    pub const MIN_RECOMMENDATIONS: usize = 3;
    /// Maximum number of recommendations returned to the caller
    pub const MAX_RECOMMENDATIONS: usize = 5;
}

/// Service identity used by structured logging
pub mod service_names {
    /// Default service name for log records
    pub const STAGECRAFT: &str = "stagecraft";
}

/// Marketing-effort tags with special meaning
pub mod marketing {
    /// Sentinel tag meaning the musician does no marketing at all
    pub const NONE: &str = "none";
    /// Social media presence
    pub const SOCIAL: &str = "social";
    /// Mailing list
    pub const MAILING: &str = "mailing";
    /// Personal or band website
    pub const WEBSITE: &str = "website";
    /// Industry networking
    pub const NETWORKING: &str = "networking";
}

/// Time windows used by activity classification
pub mod time_windows {
    /// Months of history counted as "recent" activity
    pub const RECENT_ACTIVITY_MONTHS: u32 = 3;
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Average days per month
    pub const DAYS_PER_MONTH: f64 = 30.44;
}
