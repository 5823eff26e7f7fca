//! Derived progress state. Nothing in this module is persisted; snapshots
//! are recomputed on every read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget progress states. Expired budgets settle into one of the first
/// three outcome states; active ones are ranked against the time-weighted
/// expectation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    NotStarted,
    OverBudget,
    NearlyMaxed,
    UnderBudget,
    Critical,
    Warning,
    OnTrack,
    MinimalSpending,
}

impl BudgetStatus {
    pub fn slug(&self) -> &'static str {
        match self {
            BudgetStatus::NotStarted => "not-started",
            BudgetStatus::OverBudget => "over-budget",
            BudgetStatus::NearlyMaxed => "nearly-maxed",
            BudgetStatus::UnderBudget => "under-budget",
            BudgetStatus::Critical => "critical",
            BudgetStatus::Warning => "warning",
            BudgetStatus::OnTrack => "on-track",
            BudgetStatus::MinimalSpending => "minimal-spending",
        }
    }
}

/// Saving-goal progress states. The good direction is inverted relative to
/// budgets: accumulating faster than expected is ahead, not overspend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    Achieved,
    PartiallyAchieved,
    MissedTarget,
    AchievedEarly,
    Ahead,
    OnTrack,
    SlightlyBehind,
    AtRisk,
}

impl GoalStatus {
    pub fn slug(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not-started",
            GoalStatus::Achieved => "achieved",
            GoalStatus::PartiallyAchieved => "partially-achieved",
            GoalStatus::MissedTarget => "missed-target",
            GoalStatus::AchievedEarly => "achieved-early",
            GoalStatus::Ahead => "ahead",
            GoalStatus::OnTrack => "on-track",
            GoalStatus::SlightlyBehind => "slightly-behind",
            GoalStatus::AtRisk => "at-risk",
        }
    }
}

/// Status of either limit flavour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum ProgressStatus {
    Budget(BudgetStatus),
    Goal(GoalStatus),
}

impl ProgressStatus {
    pub fn slug(&self) -> &'static str {
        match self {
            ProgressStatus::Budget(status) => status.slug(),
            ProgressStatus::Goal(status) => status.slug(),
        }
    }
}

/// Everything a dashboard row needs: ratios, remaining room, the classified
/// status, and the rendered alert (if the resolver knows the locale/key).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSnapshot {
    /// Accumulated over target, 4 decimal places.
    pub usage_ratio: Decimal,
    /// Usage as a percentage, 2 decimal places, round-half-up.
    pub usage_percent: Decimal,
    /// Elapsed over total days, clamped to [0, 1], 4 decimal places.
    pub elapsed_ratio: Decimal,
    /// Target scaled by the elapsed ratio: where linear progress would be.
    pub expected_amount: Decimal,
    /// Elapsed ratio as a percentage, 2 decimal places.
    pub expected_percent: Decimal,
    /// Target minus accumulated; negative once the target is exceeded.
    pub remaining_amount: Decimal,
    /// Days until the span ends; negative after expiry.
    pub remaining_days: i64,
    pub status: ProgressStatus,
    pub notification: Option<String>,
}
