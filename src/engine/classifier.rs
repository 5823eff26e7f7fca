//! Status classification.
//!
//! Budgets and saving goals share the same skeleton (pending, expired, or
//! active against a time-weighted expectation) but invert the good
//! direction, so each kind supplies its own threshold table and the branch
//! logic lives here once. Inequalities are deliberate behavior: `Above`
//! bands use strict `>`, `AtLeast` bands use `>=`, and moving a boundary
//! value across them changes the classification.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{BudgetStatus, GoalStatus, LimitEntity, LimitKind, ProgressStatus};
use crate::engine::calculator::{round_ratio, ProgressFigures};

#[derive(Clone, Copy)]
enum Bound {
    Above,
    AtLeast,
}

struct Band<S> {
    limit: Decimal,
    bound: Bound,
    status: S,
}

impl<S> Band<S> {
    fn above(limit: Decimal, status: S) -> Self {
        Band {
            limit,
            bound: Bound::Above,
            status,
        }
    }

    fn at_least(limit: Decimal, status: S) -> Self {
        Band {
            limit,
            bound: Bound::AtLeast,
            status,
        }
    }
}

/// First matching band wins; tables are ordered from highest threshold down.
fn pick<S: Copy>(value: Decimal, bands: &[Band<S>], fallback: S) -> S {
    for band in bands {
        let hit = match band.bound {
            Bound::Above => value > band.limit,
            Bound::AtLeast => value >= band.limit,
        };
        if hit {
            return band.status;
        }
    }
    fallback
}

enum Phase {
    Pending,
    Expired,
    Active,
}

fn phase(entity: &LimitEntity, today: NaiveDate) -> Phase {
    if today < entity.span.start {
        Phase::Pending
    } else if today > entity.span.end {
        Phase::Expired
    } else {
        Phase::Active
    }
}

/// Accumulated amount relative to where linear progress says it should be.
fn pace_ratio(entity: &LimitEntity, figures: &ProgressFigures) -> Decimal {
    if figures.expected_amount > Decimal::ZERO {
        round_ratio(entity.accumulated_amount / figures.expected_amount)
    } else {
        Decimal::ZERO
    }
}

/// Maps one entity and its figures to exactly one status. Total over all
/// valid inputs: every branch ends in a band table with a fallback.
pub fn classify(entity: &LimitEntity, figures: &ProgressFigures, today: NaiveDate) -> ProgressStatus {
    match entity.kind {
        LimitKind::Budget => ProgressStatus::Budget(classify_budget(entity, figures, today)),
        LimitKind::SavingGoal => ProgressStatus::Goal(classify_goal(entity, figures, today)),
    }
}

fn classify_budget(
    entity: &LimitEntity,
    figures: &ProgressFigures,
    today: NaiveDate,
) -> BudgetStatus {
    match phase(entity, today) {
        Phase::Pending => BudgetStatus::NotStarted,
        Phase::Expired => pick(
            figures.usage_ratio,
            &[
                Band::above(Decimal::ONE, BudgetStatus::OverBudget),
                Band::above(Decimal::new(9, 1), BudgetStatus::NearlyMaxed),
            ],
            BudgetStatus::UnderBudget,
        ),
        Phase::Active => pick(
            pace_ratio(entity, figures),
            &[
                Band::above(Decimal::new(15, 1), BudgetStatus::Critical),
                Band::above(Decimal::new(12, 1), BudgetStatus::Warning),
                Band::at_least(Decimal::new(8, 1), BudgetStatus::OnTrack),
                Band::at_least(Decimal::new(5, 1), BudgetStatus::UnderBudget),
            ],
            BudgetStatus::MinimalSpending,
        ),
    }
}

fn classify_goal(entity: &LimitEntity, figures: &ProgressFigures, today: NaiveDate) -> GoalStatus {
    match phase(entity, today) {
        Phase::Pending => GoalStatus::NotStarted,
        Phase::Expired => pick(
            figures.usage_ratio,
            &[
                Band::at_least(Decimal::ONE, GoalStatus::Achieved),
                Band::at_least(Decimal::new(75, 2), GoalStatus::PartiallyAchieved),
            ],
            GoalStatus::MissedTarget,
        ),
        Phase::Active => {
            // Hitting the target before the deadline short-circuits the
            // pace bands.
            if entity.accumulated_amount >= entity.target_amount {
                return GoalStatus::AchievedEarly;
            }
            pick(
                pace_ratio(entity, figures),
                &[
                    Band::above(Decimal::new(12, 1), GoalStatus::Ahead),
                    Band::at_least(Decimal::new(8, 1), GoalStatus::OnTrack),
                    Band::at_least(Decimal::new(6, 1), GoalStatus::SlightlyBehind),
                ],
                GoalStatus::AtRisk,
            )
        }
    }
}
