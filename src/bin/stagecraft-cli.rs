// ABOUTME: Stagecraft CLI - ranks recommendations and prints analytics for musician profiles
// ABOUTME: Reads profiles from JSON files and writes human-readable or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors
//!
//! Usage:
//! ```bash
//! # Ranked recommendations for a profile as of today
//! stagecraft-cli recommend --profile ./profiles/alex.json
//!
//! # Reproduce the list for a past date, with weighting diagnostics
//! stagecraft-cli recommend --profile ./profiles/alex.json --date 2025-12-01 --explain
//!
//! # Machine-readable output
//! stagecraft-cli recommend --profile ./profiles/alex.json --json
//!
//! # Performance and practice analytics
//! stagecraft-cli analyze --profile ./profiles/alex.json
//!
//! # Rank several stored profiles in parallel
//! stagecraft-cli batch --dir ./profiles alex sam jordan
//! ```

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use stagecraft::logging::LoggingConfig;
use stagecraft::profile_source::{read_profile_file, JsonDirectoryProfileSource, ProfileSource};
use stagecraft_core::errors::AppError;
use stagecraft_core::models::MusicianProfile;
use stagecraft_intelligence::{
    analyze_performance_trends, analyze_practice_habits, summarize_activity, ActivitySummary,
    PerformanceTrends, PracticeHabits, Recommendation, RecommendationContext,
    RecommendationEngine, RecommendationEngineConfig, WeightedRecommendation,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "stagecraft-cli",
    about = "Stagecraft career recommendations",
    long_about = "Ranks personalized career recommendations and prints activity analytics for musician profiles stored as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print ranked recommendations for one profile
    Recommend {
        /// Path to the profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Evaluate as of this date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<DateTime<Utc>>,

        /// Show weighted scores and the factors behind them
        #[arg(long)]
        explain: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print performance and practice analytics for one profile
    Analyze {
        /// Path to the profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Evaluate as of this date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<DateTime<Utc>>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Rank recommendations for several stored profiles in parallel
    Batch {
        /// Directory holding `<id>.json` profile files
        #[arg(long)]
        dir: PathBuf,

        /// Profile ids to load
        #[arg(required = true)]
        ids: Vec<String>,

        /// Evaluate as of this date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<DateTime<Utc>>,
    },
}

/// Analytics output for the `analyze` command
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport {
    profile_id: String,
    context: RecommendationContext,
    summary: ActivitySummary,
    performance: PerformanceTrends,
    practice: PracticeHabits,
}

/// Batch output entry
#[derive(Serialize)]
struct BatchEntry<'a> {
    id: &'a str,
    recommendations: Vec<Recommendation>,
}

/// Dates are evaluated at noon UTC so the month never shifts across time zones
fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))?;
    date.and_hms_opt(12, 0, 0)
        .map(|noon| noon.and_utc())
        .ok_or_else(|| format!("invalid date: {raw}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    let config = RecommendationEngineConfig::from_env().map_err(AppError::from)?;
    let engine = RecommendationEngine::with_config(config);

    match cli.command {
        Command::Recommend {
            profile,
            date,
            explain,
            json,
        } => {
            let profile = read_profile_file(&profile)?;
            let now = date.unwrap_or_else(Utc::now);
            recommend(&engine, &profile, now, explain, json)
        }
        Command::Analyze {
            profile,
            date,
            json,
        } => {
            let profile = read_profile_file(&profile)?;
            let now = date.unwrap_or_else(Utc::now);
            analyze(&engine, &profile, now, json)
        }
        Command::Batch { dir, ids, date } => {
            let source = JsonDirectoryProfileSource::new(dir);
            let profiles = ids
                .iter()
                .map(|id| source.load(id))
                .collect::<Result<Vec<_>, _>>()?;
            let now = date.unwrap_or_else(Utc::now);
            batch(&engine, &profiles, now)
        }
    }
}

fn recommend(
    engine: &RecommendationEngine,
    profile: &MusicianProfile,
    now: DateTime<Utc>,
    explain: bool,
    json: bool,
) -> Result<()> {
    let ranked = engine.rank(profile, now);
    info!(profile_id = %profile.id, count = ranked.len(), "recommendations ready");

    if json {
        let output = if explain {
            serde_json::to_string_pretty(&ranked)?
        } else {
            let plain: Vec<Recommendation> =
                ranked.into_iter().map(Recommendation::from).collect();
            serde_json::to_string_pretty(&plain)?
        };
        println!("{output}");
        return Ok(());
    }

    for (position, weighted) in ranked.iter().enumerate() {
        print_recommendation(position + 1, weighted, explain);
    }
    Ok(())
}

fn print_recommendation(position: usize, weighted: &WeightedRecommendation, explain: bool) {
    let rec = &weighted.recommendation;
    println!(
        "{position}. [{:?}/{:?}] {}",
        rec.priority, rec.category, rec.title
    );
    println!("   {}", rec.description);
    if explain {
        println!("   id: {}  score: {:.1}", rec.id, weighted.weighted_score);
        for factor in &weighted.relevance_factors {
            println!("     - {factor}");
        }
    }
}

fn analyze(
    engine: &RecommendationEngine,
    profile: &MusicianProfile,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let report = AnalysisReport {
        profile_id: profile.id.clone(),
        context: engine.context(profile, now),
        summary: summarize_activity(profile),
        performance: analyze_performance_trends(&profile.shows),
        practice: analyze_practice_habits(&profile.practice_log),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let context = &report.context;
    println!("Profile {}", report.profile_id);
    println!(
        "  stage: {}  activity: {}  finances: {}",
        context.career_stage.as_str(),
        context.recent_activity_level.as_str(),
        context.financial_status.as_str()
    );
    let focus: Vec<&str> = context.focus_areas.iter().map(|area| area.as_str()).collect();
    println!("  focus areas: {}", focus.join(", "));

    let summary = &report.summary;
    println!(
        "  shows: {}  earnings: {:.2}  avg audience: {:.1}",
        summary.show_count, summary.total_show_earnings, summary.average_audience
    );
    println!(
        "  show frequency: {:?}  venues: {:?}",
        report.performance.show_frequency, report.performance.venue_progression
    );

    let practice = &report.practice;
    println!(
        "  practice: {:.0} min/week, {:?}, adjust: {:?}{}",
        practice.weekly_average,
        practice.consistency,
        practice.recommended_adjustment,
        if practice.suggest_professional_lessons {
            ", consider lessons"
        } else {
            ""
        }
    );
    println!(
        "  recordings: {} sessions, {} songs, {} plays",
        summary.recording_count, summary.recorded_song_count, summary.total_plays
    );
    Ok(())
}

fn batch(
    engine: &RecommendationEngine,
    profiles: &[MusicianProfile],
    now: DateTime<Utc>,
) -> Result<()> {
    let results = engine.generate_batch(profiles, now);
    let entries: Vec<BatchEntry<'_>> = profiles
        .iter()
        .zip(results)
        .map(|(profile, recommendations)| BatchEntry {
            id: &profile.id,
            recommendations,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
