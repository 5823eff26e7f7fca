//! Write-side entry points for budgets and saving goals.
//!
//! Every mutation is validated fail-fast: field checks, then ownership of
//! the referenced category and wallet, then the interval-overlap rule.
//! Nothing is persisted when any step rejects.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::{DateSpan, LimitEntity, LimitKind},
    engine::overlap::has_overlap,
    errors::EngineError,
    storage::{LimitStore, OwnershipResolver},
};

use super::{ServiceError, ServiceResult};

/// Caller-supplied fields for creating or updating a limit entity.
#[derive(Debug, Clone)]
pub struct LimitDraft {
    pub kind: LimitKind,
    pub category_id: Uuid,
    pub wallet_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub struct LimitService;

impl LimitService {
    pub fn create<S>(store: &mut S, user_id: Uuid, draft: LimitDraft) -> ServiceResult<LimitEntity>
    where
        S: LimitStore + OwnershipResolver,
    {
        let span = Self::validate(store, user_id, &draft, None)?;
        let mut entity = LimitEntity::new(
            draft.kind,
            user_id,
            draft.category_id,
            draft.wallet_id,
            draft.name,
            draft.target_amount,
            span,
        );
        if let Some(description) = draft.description {
            entity = entity.with_description(description);
        }
        store.insert(entity.clone())?;
        tracing::debug!(kind = %entity.kind, id = %entity.id, "limit created");
        Ok(entity)
    }

    pub fn update<S>(
        store: &mut S,
        user_id: Uuid,
        id: Uuid,
        draft: LimitDraft,
    ) -> ServiceResult<LimitEntity>
    where
        S: LimitStore + OwnershipResolver,
    {
        let existing = Self::owned_entity(store, user_id, id)?;
        if draft.kind != existing.kind {
            return Err(ServiceError::Invalid(
                "a limit cannot change kind after creation".into(),
            ));
        }
        let span = Self::validate(store, user_id, &draft, Some(id))?;
        let mut updated = existing;
        updated.category_id = draft.category_id;
        updated.wallet_id = draft.wallet_id;
        updated.name = draft.name;
        updated.description = draft.description;
        updated.target_amount = draft.target_amount;
        updated.span = span;
        store.update(updated.clone())?;
        tracing::debug!(kind = %updated.kind, id = %updated.id, "limit updated");
        Ok(updated)
    }

    pub fn delete<S>(store: &mut S, user_id: Uuid, id: Uuid) -> ServiceResult<()>
    where
        S: LimitStore + OwnershipResolver,
    {
        let entity = Self::owned_entity(store, user_id, id)?;
        store.remove(entity.id)?;
        tracing::debug!(kind = %entity.kind, id = %entity.id, "limit deleted");
        Ok(())
    }

    fn owned_entity<S>(store: &S, user_id: Uuid, id: Uuid) -> ServiceResult<LimitEntity>
    where
        S: LimitStore,
    {
        let entity = store
            .get(id)?
            .ok_or(EngineError::NotFound { entity: "limit", id })?;
        if entity.user_id != user_id {
            return Err(EngineError::AccessDenied { entity: "limit", id }.into());
        }
        Ok(entity)
    }

    /// Field, ownership, and overlap checks shared by create and update.
    /// Returns the validated span.
    fn validate<S>(
        store: &S,
        user_id: Uuid,
        draft: &LimitDraft,
        exclude: Option<Uuid>,
    ) -> ServiceResult<DateSpan>
    where
        S: LimitStore + OwnershipResolver,
    {
        if draft.name.trim().is_empty() {
            return Err(ServiceError::Invalid("limit name must not be empty".into()));
        }
        if draft.target_amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid(
                "target amount must be positive".into(),
            ));
        }
        let span = DateSpan::new(draft.start, draft.end)?;
        store.resolve_category(draft.category_id, user_id)?;
        store.resolve_wallet(draft.wallet_id, user_id)?;
        let siblings =
            store.list_for_category_wallet(draft.category_id, draft.wallet_id, draft.kind)?;
        if has_overlap(span, &siblings, exclude) {
            tracing::debug!(kind = %draft.kind, "rejected overlapping span");
            return Err(EngineError::Overlap(draft.kind).into());
        }
        Ok(span)
    }
}
