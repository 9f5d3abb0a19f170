// ABOUTME: Career goal model with type and status enumerations
// ABOUTME: Goals carry progress values and optional deadlines and auto-update links
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Goal domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Number of shows, audience size, venue targets
    Performance,
    /// Technique or repertoire targets
    Skill,
    /// Earnings targets
    Financial,
    /// Studio output targets
    Recording,
    /// Anything else
    Custom,
}

/// Goal lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Being worked on
    Active,
    /// Reached
    Completed,
    /// Temporarily on hold
    Paused,
    /// Abandoned
    Cancelled,
}

/// A career goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Goal identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Goal domain
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// Lifecycle state
    pub status: GoalStatus,
    /// Progress so far
    #[serde(default)]
    pub current_value: f64,
    /// Value that completes the goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    /// Due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Activity type that advances this goal automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_action_type: Option<String>,
    /// Metric read from the linked activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_metric: Option<String>,
    /// Whether linked activities update progress automatically
    #[serde(default)]
    pub auto_update: bool,
}

impl Goal {
    /// Create an active goal with no target, deadline, or link
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        goal_type: GoalType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            goal_type,
            status: GoalStatus::Active,
            current_value: 0.0,
            target_value: None,
            deadline: None,
            created_at,
            linked_action_type: None,
            linked_metric: None,
            auto_update: false,
        }
    }

    /// Whether the goal is being worked on
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    /// Fraction of the target reached, clamped to `[0, 1]`
    ///
    /// Returns `None` when the goal has no positive target.
    #[must_use]
    pub fn progress_ratio(&self) -> Option<f64> {
        self.target_value
            .filter(|target| *target > 0.0)
            .map(|target| (self.current_value / target).clamp(0.0, 1.0))
    }

    /// Whether an active goal is past its deadline without being reached
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_active()
            && self.deadline.is_some_and(|deadline| deadline < now)
            && self.progress_ratio().is_none_or(|ratio| ratio < 1.0)
    }
}
