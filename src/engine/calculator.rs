//! Time-weighted progress arithmetic.
//!
//! All monetary and percentage math runs on [`Decimal`] with round-half-up,
//! never binary floating point. Ratios used for classification keep four
//! decimal places; percentages surfaced to callers are rounded to two.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::DateSpan;

const RATIO_SCALE: u32 = 4;
const PERCENT_SCALE: u32 = 2;

/// Raw calculator output, before classification and message composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressFigures {
    pub usage_ratio: Decimal,
    pub usage_percent: Decimal,
    pub elapsed_ratio: Decimal,
    pub expected_amount: Decimal,
    pub expected_percent: Decimal,
    pub remaining_amount: Decimal,
    pub remaining_days: i64,
}

pub(crate) fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

pub(crate) fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PERCENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes usage and schedule figures for one limit entity.
///
/// `today` may fall anywhere relative to the span: elapsed time is clamped
/// into it, while `remaining_days` keeps its sign so callers can tell how
/// long ago an entity expired. A zero-length span counts as fully elapsed,
/// and a non-positive target yields a zero usage ratio.
pub fn compute(
    accumulated: Decimal,
    target: Decimal,
    span: DateSpan,
    today: NaiveDate,
) -> ProgressFigures {
    let usage_ratio = if target > Decimal::ZERO {
        round_ratio(accumulated / target)
    } else {
        Decimal::ZERO
    };
    let usage_percent = round_percent(usage_ratio * Decimal::ONE_HUNDRED);

    let total_days = span.total_days();
    let elapsed_ratio = if total_days > 0 {
        let elapsed_days = (span.clamp(today) - span.start).num_days();
        round_ratio(Decimal::from(elapsed_days) / Decimal::from(total_days))
    } else {
        Decimal::ONE
    };

    ProgressFigures {
        usage_ratio,
        usage_percent,
        elapsed_ratio,
        expected_amount: target * elapsed_ratio,
        expected_percent: round_percent(elapsed_ratio * Decimal::ONE_HUNDRED),
        remaining_amount: target - accumulated,
        remaining_days: (span.end - today).num_days(),
    }
}
