//! Read-side orchestrator: fetch, compute, classify, compose.
//!
//! One malformed persisted record must not blank the whole dashboard, so
//! each entity is evaluated in isolation and failures become a per-row
//! marker instead of aborting the batch.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::{LimitEntity, LimitKind, ProgressSnapshot},
    engine::{calculator, classifier, composer, MessageResolver},
    storage::{LimitStore, OwnershipResolver},
};

use super::ServiceResult;

/// One dashboard row: the entity plus either its snapshot or the reason it
/// could not be evaluated.
#[derive(Debug, Clone)]
pub struct ProgressRow {
    pub entity: LimitEntity,
    pub outcome: RowOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Computed(ProgressSnapshot),
    Failed(String),
}

pub struct ProgressService;

impl ProgressService {
    /// Progress and alerts for every limit of `kind` owned by `user_id`,
    /// evaluated as of `today`. Row order follows storage order.
    pub fn progress_for_user<S>(
        store: &S,
        messages: &dyn MessageResolver,
        locale: &str,
        user_id: Uuid,
        kind: LimitKind,
        today: NaiveDate,
    ) -> ServiceResult<Vec<ProgressRow>>
    where
        S: LimitStore + OwnershipResolver,
    {
        let entities = store.list_for_user(user_id, kind)?;
        let rows = entities
            .into_iter()
            .map(|entity| {
                let outcome = Self::evaluate(store, messages, locale, user_id, &entity, today);
                ProgressRow { entity, outcome }
            })
            .collect();
        Ok(rows)
    }

    fn evaluate<S>(
        store: &S,
        messages: &dyn MessageResolver,
        locale: &str,
        user_id: Uuid,
        entity: &LimitEntity,
        today: NaiveDate,
    ) -> RowOutcome
    where
        S: OwnershipResolver,
    {
        match Self::snapshot(store, messages, locale, user_id, entity, today) {
            Ok(snapshot) => RowOutcome::Computed(snapshot),
            Err(reason) => {
                tracing::warn!(id = %entity.id, %reason, "skipping malformed limit row");
                RowOutcome::Failed(reason)
            }
        }
    }

    fn snapshot<S>(
        store: &S,
        messages: &dyn MessageResolver,
        locale: &str,
        user_id: Uuid,
        entity: &LimitEntity,
        today: NaiveDate,
    ) -> Result<ProgressSnapshot, String>
    where
        S: OwnershipResolver,
    {
        // Persisted rows bypass the constructors, so re-check the
        // invariants the calculator assumes.
        if !entity.span.is_ordered() {
            return Err("span end precedes start".into());
        }
        if entity.target_amount < Decimal::ZERO {
            return Err("target amount is negative".into());
        }
        if entity.accumulated_amount < Decimal::ZERO {
            return Err("accumulated amount is negative".into());
        }
        let category = store
            .resolve_category(entity.category_id, user_id)
            .map_err(|err| err.to_string())?;

        let figures = calculator::compute(
            entity.accumulated_amount,
            entity.target_amount,
            entity.span,
            today,
        );
        let status = classifier::classify(entity, &figures, today);
        let notification =
            composer::compose(messages, locale, &status, entity, &category.name, &figures);

        Ok(ProgressSnapshot {
            usage_ratio: figures.usage_ratio,
            usage_percent: figures.usage_percent,
            elapsed_ratio: figures.elapsed_ratio,
            expected_amount: figures.expected_amount,
            expected_percent: figures.expected_percent,
            remaining_amount: figures.remaining_amount,
            remaining_days: figures.remaining_days,
            status,
            notification,
        })
    }
}
