// ABOUTME: Descriptive analytics over performance and practice history
// ABOUTME: Trend classification, practice consistency, venue scoring, and activity totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stagecraft_core::constants::time_windows::DAYS_PER_WEEK;
use stagecraft_core::models::{
    MusicianProfile, PerformanceRecord, PracticeSession, RecordingSession, VenueType,
};
use std::collections::HashSet;

/// Shows or sessions needed before any trend is reported
pub const MIN_TREND_ENTRIES: usize = 4;

/// Relative change between halves that counts as a frequency trend
const FREQUENCY_TREND_THRESHOLD: f64 = 0.10;

/// Absolute venue-score change between halves that counts as progression
const VENUE_TREND_MARGIN: f64 = 0.5;

/// Mean and max day gaps for "excellent" practice consistency
const EXCELLENT_MEAN_GAP_DAYS: f64 = 2.0;
const EXCELLENT_MAX_GAP_DAYS: i64 = 7;

/// Mean and max day gaps for "good" practice consistency
const GOOD_MEAN_GAP_DAYS: f64 = 4.0;
const GOOD_MAX_GAP_DAYS: i64 = 14;

/// Weekly practice minutes below which more time is recommended
const LOW_WEEKLY_PRACTICE_MINUTES: f64 = 150.0;

/// Weekly practice minutes above which less time is recommended
const HIGH_WEEKLY_PRACTICE_MINUTES: f64 = 1200.0;

/// Sessions logged before a narrow skill set suggests a plateau
const LESSONS_MIN_SESSIONS: usize = 12;

/// Distinct skills at or below which practice counts as narrow
const LESSONS_MAX_DISTINCT_SKILLS: usize = 2;

/// Direction of show frequency over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyTrend {
    /// Shows are getting closer together
    Increasing,
    /// No meaningful change, or not enough data
    Stable,
    /// Shows are getting further apart
    Decreasing,
}

/// Direction of venue prestige over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueProgression {
    /// Recent venues rank higher
    Improving,
    /// No meaningful change, or not enough data
    Stable,
    /// Recent venues rank lower
    Declining,
}

/// Regularity of practice sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeConsistency {
    /// Short, even gaps between sessions
    Excellent,
    /// Acceptable gaps
    Good,
    /// Long or irregular gaps, or not enough data
    NeedsImprovement,
}

/// Suggested change to weekly practice volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeAdjustment {
    /// Practice more
    Increase,
    /// Keep the current volume
    Maintain,
    /// Practice less
    Reduce,
}

/// Summary of a performance history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTrends {
    /// Mean audience per show
    pub average_audience_size: f64,
    /// Sum of all show payments
    pub total_earnings: f64,
    /// Show frequency direction
    pub show_frequency: FrequencyTrend,
    /// Venue prestige direction
    pub venue_progression: VenueProgression,
}

/// Summary of a practice history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeHabits {
    /// Mean practice minutes per week across the logged span
    pub weekly_average: f64,
    /// Regularity classification
    pub consistency: PracticeConsistency,
    /// Suggested volume change
    pub recommended_adjustment: PracticeAdjustment,
    /// Whether the history suggests a plateau a teacher could break
    pub suggest_professional_lessons: bool,
}

/// Totals across every activity collection of a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Number of logged shows
    pub show_count: usize,
    /// Sum of show payments
    pub total_show_earnings: f64,
    /// Mean payment per show
    pub average_payment: f64,
    /// Mean audience per show
    pub average_audience: f64,
    /// Number of logged practice sessions
    pub practice_session_count: usize,
    /// Sum of practice minutes
    pub total_practice_minutes: u64,
    /// Number of recording sessions
    pub recording_count: usize,
    /// Number of recorded songs
    pub recorded_song_count: usize,
    /// Sum of recording costs
    pub total_recording_cost: f64,
    /// Sum of recorded-song revenue
    pub total_recording_revenue: f64,
    /// Sum of recorded-song plays
    pub total_plays: u64,
}

impl ActivitySummary {
    /// Show earnings plus recording revenue
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.total_show_earnings + self.total_recording_revenue
    }
}

/// Ordinal prestige of a venue type, 1 (bar) through 5 (festival)
#[must_use]
pub const fn venue_score(venue_type: VenueType) -> u8 {
    match venue_type {
        VenueType::Bar => 1,
        VenueType::Restaurant => 2,
        VenueType::PrivateEvent | VenueType::Other => 3,
        VenueType::ConcertHall => 4,
        VenueType::Festival => 5,
    }
}

/// Mean venue score over a set of shows; zero when empty
#[must_use]
pub fn average_venue_score(shows: &[PerformanceRecord]) -> f64 {
    mean(shows.iter().map(|show| f64::from(venue_score(show.venue_type))))
}

/// Analyze a performance history
///
/// Fewer than [`MIN_TREND_ENTRIES`] shows always classify as stable.
#[must_use]
pub fn analyze_performance_trends(shows: &[PerformanceRecord]) -> PerformanceTrends {
    let total_earnings = shows.iter().map(|show| show.payment).sum();
    let average_audience_size = mean(shows.iter().map(|show| f64::from(show.audience_size)));

    if shows.len() < MIN_TREND_ENTRIES {
        return PerformanceTrends {
            average_audience_size,
            total_earnings,
            show_frequency: FrequencyTrend::Stable,
            venue_progression: VenueProgression::Stable,
        };
    }

    let mut sorted: Vec<&PerformanceRecord> = shows.iter().collect();
    sorted.sort_by_key(|show| show.date);
    let (first_half, second_half) = sorted.split_at(sorted.len() / 2);

    let first_dates: Vec<DateTime<Utc>> = first_half.iter().map(|show| show.date).collect();
    let second_dates: Vec<DateTime<Utc>> = second_half.iter().map(|show| show.date).collect();
    let show_frequency = classify_frequency(&first_dates, &second_dates);

    let first_venue = mean(
        first_half
            .iter()
            .map(|show| f64::from(venue_score(show.venue_type))),
    );
    let second_venue = mean(
        second_half
            .iter()
            .map(|show| f64::from(venue_score(show.venue_type))),
    );
    let venue_progression = if second_venue - first_venue > VENUE_TREND_MARGIN {
        VenueProgression::Improving
    } else if first_venue - second_venue > VENUE_TREND_MARGIN {
        VenueProgression::Declining
    } else {
        VenueProgression::Stable
    };

    PerformanceTrends {
        average_audience_size,
        total_earnings,
        show_frequency,
        venue_progression,
    }
}

/// Analyze a practice history
///
/// Fewer than [`MIN_TREND_ENTRIES`] sessions always classify as needing improvement.
#[must_use]
pub fn analyze_practice_habits(sessions: &[PracticeSession]) -> PracticeHabits {
    if sessions.is_empty() {
        return PracticeHabits {
            weekly_average: 0.0,
            consistency: PracticeConsistency::NeedsImprovement,
            recommended_adjustment: PracticeAdjustment::Increase,
            suggest_professional_lessons: false,
        };
    }

    let mut dates: Vec<DateTime<Utc>> = sessions.iter().map(|session| session.date).collect();
    dates.sort();

    let total_minutes: u64 = sessions
        .iter()
        .map(|session| u64::from(session.duration_minutes))
        .sum();
    let weekly_average = total_minutes as f64 / weeks_spanned(&dates);

    let consistency = classify_consistency(&dates);

    let recommended_adjustment = if weekly_average < LOW_WEEKLY_PRACTICE_MINUTES {
        PracticeAdjustment::Increase
    } else if weekly_average > HIGH_WEEKLY_PRACTICE_MINUTES {
        PracticeAdjustment::Reduce
    } else {
        PracticeAdjustment::Maintain
    };

    let distinct_skills: HashSet<String> = sessions
        .iter()
        .flat_map(|session| session.skills_worked_on.iter())
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect();
    let suggest_professional_lessons = sessions.len() >= LESSONS_MIN_SESSIONS
        && distinct_skills.len() <= LESSONS_MAX_DISTINCT_SKILLS;

    PracticeHabits {
        weekly_average,
        consistency,
        recommended_adjustment,
        suggest_professional_lessons,
    }
}

/// Totals across every activity collection of a profile
#[must_use]
pub fn summarize_activity(profile: &MusicianProfile) -> ActivitySummary {
    let shows = &profile.shows;
    let total_show_earnings: f64 = shows.iter().map(|show| show.payment).sum();

    ActivitySummary {
        show_count: shows.len(),
        total_show_earnings,
        average_payment: mean(shows.iter().map(|show| show.payment)),
        average_audience: mean(shows.iter().map(|show| f64::from(show.audience_size))),
        practice_session_count: profile.practice_log.len(),
        total_practice_minutes: profile
            .practice_log
            .iter()
            .map(|session| u64::from(session.duration_minutes))
            .sum(),
        recording_count: profile.recordings.len(),
        recorded_song_count: profile
            .recordings
            .iter()
            .map(|recording| recording.songs.len())
            .sum(),
        total_recording_cost: profile.recordings.iter().map(|r| r.cost).sum(),
        total_recording_revenue: profile
            .recordings
            .iter()
            .map(RecordingSession::total_revenue)
            .sum(),
        total_plays: profile
            .recordings
            .iter()
            .map(RecordingSession::total_plays)
            .sum(),
    }
}

/// Weeks between the first and last date, never less than one
#[must_use]
pub fn weeks_spanned(sorted_dates: &[DateTime<Utc>]) -> f64 {
    match (sorted_dates.first(), sorted_dates.last()) {
        (Some(first), Some(last)) => {
            ((*last - *first).num_days() as f64 / DAYS_PER_WEEK).max(1.0)
        }
        _ => 1.0,
    }
}

fn classify_frequency(first: &[DateTime<Utc>], second: &[DateTime<Utc>]) -> FrequencyTrend {
    let first_rate = intervals_per_day(first);
    let second_rate = intervals_per_day(second);
    if first_rate <= 0.0 {
        return FrequencyTrend::Stable;
    }

    let relative_change = (second_rate - first_rate) / first_rate;
    if relative_change > FREQUENCY_TREND_THRESHOLD {
        FrequencyTrend::Increasing
    } else if relative_change < -FREQUENCY_TREND_THRESHOLD {
        FrequencyTrend::Decreasing
    } else {
        FrequencyTrend::Stable
    }
}

/// Intervals per day across a sorted window; a window shorter than a day counts as one day
///
/// Halves of unequal length compare evenly because intervals are counted, not events.
fn intervals_per_day(sorted_dates: &[DateTime<Utc>]) -> f64 {
    let span_days = match (sorted_dates.first(), sorted_dates.last()) {
        (Some(first), Some(last)) => ((*last - *first).num_days() as f64).max(1.0),
        _ => return 0.0,
    };
    sorted_dates.len().saturating_sub(1) as f64 / span_days
}

fn classify_consistency(sorted_dates: &[DateTime<Utc>]) -> PracticeConsistency {
    if sorted_dates.len() < MIN_TREND_ENTRIES {
        return PracticeConsistency::NeedsImprovement;
    }

    let gaps: Vec<i64> = sorted_dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect();
    let mean_gap = mean(gaps.iter().map(|gap| *gap as f64));
    let max_gap = gaps.iter().copied().max().unwrap_or(0);

    if mean_gap <= EXCELLENT_MEAN_GAP_DAYS && max_gap <= EXCELLENT_MAX_GAP_DAYS {
        PracticeConsistency::Excellent
    } else if mean_gap <= GOOD_MEAN_GAP_DAYS && max_gap <= GOOD_MAX_GAP_DAYS {
        PracticeConsistency::Good
    } else {
        PracticeConsistency::NeedsImprovement
    }
}

/// Arithmetic mean; zero for an empty iterator
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
