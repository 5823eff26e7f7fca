//! Limit entities: budgets and saving goals over a date interval.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{domain::common::*, errors::EngineError};

/// Discriminates the two limit flavours. A budget caps spending against a
/// category and wallet; a saving goal targets an amount to put aside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LimitKind {
    Budget,
    SavingGoal,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LimitKind::Budget => "budget",
            LimitKind::SavingGoal => "saving goal",
        };
        f.write_str(label)
    }
}

impl LimitKind {
    /// Segment used in message keys, e.g. `budget.status.on-track`.
    pub fn key_segment(&self) -> &'static str {
        match self {
            LimitKind::Budget => "budget",
            LimitKind::SavingGoal => "goal",
        }
    }
}

/// Inclusive date interval. Both bounds belong to the span, so a span with
/// `start == end` covers exactly one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if end < start {
            return Err(EngineError::validation("span end must not precede start"));
        }
        Ok(Self { start, end })
    }

    /// Persisted records bypass the constructor, so readers re-check.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive overlap: the spans share at least one day.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.max(self.start).min(self.end)
    }
}

/// A monetary ceiling (budget) or target (saving goal) for one category and
/// wallet over a date span. `accumulated` is maintained by the transaction
/// posting path; this crate only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitEntity {
    pub id: Uuid,
    pub kind: LimitKind,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub wallet_id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub accumulated_amount: Decimal,
    pub span: DateSpan,
    pub created_at: DateTime<Utc>,
}

impl LimitEntity {
    pub fn new(
        kind: LimitKind,
        user_id: Uuid,
        category_id: Uuid,
        wallet_id: Uuid,
        name: impl Into<String>,
        target_amount: Decimal,
        span: DateSpan,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            user_id,
            category_id,
            wallet_id,
            name: name.into(),
            description: None,
            target_amount,
            accumulated_amount: Decimal::ZERO,
            span,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Identifiable for LimitEntity {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for LimitEntity {
    fn name(&self) -> &str {
        &self.name
    }
}
