//! Alert message composition.
//!
//! The engine owns the message key and the positional arguments; turning
//! those into localized text is the resolver's job. A default English
//! catalog ships with the crate so the pipeline works out of the box.

use rust_decimal::Decimal;

use crate::domain::{LimitEntity, ProgressStatus};
use crate::engine::calculator::{round_percent, ProgressFigures};

/// Locale-aware message lookup, keyed by `"<kind>.status.<slug>"`.
/// Returns `None` when no template exists for the key/locale pair.
pub trait MessageResolver {
    fn resolve(&self, key: &str, locale: &str, args: &[String]) -> Option<String>;
}

/// Positional argument layout shared by every template:
/// 0 entity name, 1 category name, 2 usage percent, 3 expected percent,
/// 4 remaining amount, 5 remaining days, 6 daily allowance.
pub fn message_args(
    entity: &LimitEntity,
    category_name: &str,
    figures: &ProgressFigures,
) -> Vec<String> {
    vec![
        entity.name.clone(),
        category_name.to_string(),
        figures.usage_percent.to_string(),
        figures.expected_percent.to_string(),
        figures.remaining_amount.to_string(),
        figures.remaining_days.to_string(),
        daily_allowance(figures).to_string(),
    ]
}

pub fn message_key(kind_segment: &str, status: &ProgressStatus) -> String {
    format!("{}.status.{}", kind_segment, status.slug())
}

/// Amount left divided by days left, the suggested daily pace. Zero once
/// the span has ended so templates never divide by a spent clock.
fn daily_allowance(figures: &ProgressFigures) -> Decimal {
    if figures.remaining_days <= 0 {
        return Decimal::ZERO;
    }
    round_percent(figures.remaining_amount / Decimal::from(figures.remaining_days))
}

/// Renders the notification for one classified entity, or `None` when the
/// resolver has no template for the key.
pub fn compose(
    resolver: &dyn MessageResolver,
    locale: &str,
    status: &ProgressStatus,
    entity: &LimitEntity,
    category_name: &str,
    figures: &ProgressFigures,
) -> Option<String> {
    let key = message_key(entity.kind.key_segment(), status);
    let args = message_args(entity, category_name, figures);
    resolver.resolve(&key, locale, &args)
}

/// Built-in en-US catalog. Informational statuses get a plain summary;
/// actionable mid-window statuses include the suggested daily pace.
pub struct EnglishMessages;

impl EnglishMessages {
    fn template(key: &str) -> Option<&'static str> {
        let template = match key {
            "budget.status.not-started" => "Budget '{0}' for {1} has not started yet.",
            "budget.status.over-budget" => {
                "Budget '{0}' for {1} closed over its limit at {2}% spent."
            }
            "budget.status.nearly-maxed" => {
                "Budget '{0}' for {1} ended close to its limit at {2}% spent."
            }
            "budget.status.under-budget" => {
                "Budget '{0}' for {1} is comfortably under its limit at {2}% spent."
            }
            "budget.status.critical" => {
                "Budget '{0}' for {1} is at a critical pace: {2}% spent against {3}% expected. Keep daily spending under {6} to stay within the limit."
            }
            "budget.status.warning" => {
                "Budget '{0}' for {1} is trending over: {2}% spent against {3}% expected. Aim for at most {6} per day."
            }
            "budget.status.on-track" => {
                "Budget '{0}' for {1} is on track: {2}% spent against {3}% expected."
            }
            "budget.status.minimal-spending" => {
                "Budget '{0}' for {1} shows minimal spending so far: {2}% of the limit used."
            }
            "goal.status.not-started" => "Saving goal '{0}' for {1} has not started yet.",
            "goal.status.achieved" => "Saving goal '{0}' for {1} was achieved: {2}% of the target saved.",
            "goal.status.partially-achieved" => {
                "Saving goal '{0}' for {1} ended partially achieved at {2}% of the target."
            }
            "goal.status.missed-target" => {
                "Saving goal '{0}' for {1} missed its target, closing at {2}% saved."
            }
            "goal.status.achieved-early" => {
                "Saving goal '{0}' for {1} was achieved early, with {5} days to spare."
            }
            "goal.status.ahead" => {
                "Saving goal '{0}' for {1} is ahead of schedule: {2}% saved against {3}% expected."
            }
            "goal.status.on-track" => {
                "Saving goal '{0}' for {1} is on track: {2}% saved against {3}% expected."
            }
            "goal.status.slightly-behind" => {
                "Saving goal '{0}' for {1} is slightly behind: {2}% saved against {3}% expected. Save about {6} per day to catch up."
            }
            "goal.status.at-risk" => {
                "Saving goal '{0}' for {1} is at risk: {2}% saved against {3}% expected. Save at least {6} per day to reach the target."
            }
            _ => return None,
        };
        Some(template)
    }
}

impl MessageResolver for EnglishMessages {
    fn resolve(&self, key: &str, _locale: &str, args: &[String]) -> Option<String> {
        Self::template(key).map(|template| fill(template, args))
    }
}

/// Replaces `{n}` placeholders with the matching positional argument.
fn fill(template: &str, args: &[String]) -> String {
    let mut rendered = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        rendered = rendered.replace(&format!("{{{}}}", index), arg);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetStatus, DateSpan, GoalStatus, LimitKind};
    use crate::engine::calculator::compute;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn budget() -> LimitEntity {
        let span = DateSpan::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let mut entity = LimitEntity::new(
            LimitKind::Budget,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "January groceries",
            dec!(1000000),
            span,
        );
        entity.accumulated_amount = dec!(700000);
        entity
    }

    #[test]
    fn actionable_message_includes_daily_pace() {
        let entity = budget();
        let today = date(2024, 1, 16);
        let figures = compute(
            entity.accumulated_amount,
            entity.target_amount,
            entity.span,
            today,
        );
        let message = compose(
            &EnglishMessages,
            "en-US",
            &ProgressStatus::Budget(BudgetStatus::Warning),
            &entity,
            "Groceries",
            &figures,
        )
        .unwrap();
        assert!(message.contains("January groceries"));
        assert!(message.contains("Groceries"));
        // remaining 300,000 over 15 days
        assert!(message.contains("20000"));
    }

    #[test]
    fn daily_allowance_is_zero_after_expiry() {
        let entity = budget();
        let figures = compute(
            entity.accumulated_amount,
            entity.target_amount,
            entity.span,
            date(2024, 2, 10),
        );
        let args = message_args(&entity, "Groceries", &figures);
        assert_eq!(args[6], "0");
    }

    #[test]
    fn unknown_key_yields_no_notification() {
        assert!(EnglishMessages
            .resolve("budget.status.unknown", "en-US", &[])
            .is_none());
    }

    #[test]
    fn every_status_has_a_template() {
        let budget_statuses = [
            BudgetStatus::NotStarted,
            BudgetStatus::OverBudget,
            BudgetStatus::NearlyMaxed,
            BudgetStatus::UnderBudget,
            BudgetStatus::Critical,
            BudgetStatus::Warning,
            BudgetStatus::OnTrack,
            BudgetStatus::MinimalSpending,
        ];
        for status in budget_statuses {
            let key = message_key("budget", &ProgressStatus::Budget(status));
            assert!(EnglishMessages::template(&key).is_some(), "missing {key}");
        }
        let goal_statuses = [
            GoalStatus::NotStarted,
            GoalStatus::Achieved,
            GoalStatus::PartiallyAchieved,
            GoalStatus::MissedTarget,
            GoalStatus::AchievedEarly,
            GoalStatus::Ahead,
            GoalStatus::OnTrack,
            GoalStatus::SlightlyBehind,
            GoalStatus::AtRisk,
        ];
        for status in goal_statuses {
            let key = message_key("goal", &ProgressStatus::Goal(status));
            assert!(EnglishMessages::template(&key).is_some(), "missing {key}");
        }
    }
}
