//! In-memory store used by tests and embedded callers.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::{Category, LimitEntity, LimitKind, Wallet},
    errors::EngineError,
    storage::{json_backend::Profile, LimitStore, OwnershipResolver, Result},
};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    categories: Vec<Category>,
    wallets: Vec<Wallet>,
    limits: Vec<LimitEntity>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        id
    }

    pub fn add_wallet(&mut self, wallet: Wallet) -> Uuid {
        let id = wallet.id;
        self.wallets.push(wallet);
        id
    }

    pub fn from_profile(profile: Profile) -> Self {
        Self {
            categories: profile.categories,
            wallets: profile.wallets,
            limits: profile.limits,
        }
    }

    pub fn to_profile(&self) -> Profile {
        Profile {
            categories: self.categories.clone(),
            wallets: self.wallets.clone(),
            limits: self.limits.clone(),
        }
    }
}

impl LimitStore for MemoryStore {
    fn list_for_user(&self, user_id: Uuid, kind: LimitKind) -> Result<Vec<LimitEntity>> {
        Ok(self
            .limits
            .iter()
            .filter(|limit| limit.user_id == user_id && limit.kind == kind)
            .cloned()
            .collect())
    }

    fn list_for_category_wallet(
        &self,
        category_id: Uuid,
        wallet_id: Uuid,
        kind: LimitKind,
    ) -> Result<Vec<LimitEntity>> {
        Ok(self
            .limits
            .iter()
            .filter(|limit| {
                limit.category_id == category_id
                    && limit.wallet_id == wallet_id
                    && limit.kind == kind
            })
            .cloned()
            .collect())
    }

    fn get(&self, id: Uuid) -> Result<Option<LimitEntity>> {
        Ok(self.limits.iter().find(|limit| limit.id == id).cloned())
    }

    fn insert(&mut self, entity: LimitEntity) -> Result<()> {
        self.limits.push(entity);
        Ok(())
    }

    fn update(&mut self, entity: LimitEntity) -> Result<()> {
        let slot = self
            .limits
            .iter_mut()
            .find(|limit| limit.id == entity.id)
            .ok_or(EngineError::NotFound {
                entity: "limit",
                id: entity.id,
            })?;
        *slot = entity;
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<()> {
        let before = self.limits.len();
        self.limits.retain(|limit| limit.id != id);
        if self.limits.len() == before {
            return Err(EngineError::NotFound { entity: "limit", id });
        }
        Ok(())
    }

    fn add_accumulated(&mut self, id: Uuid, amount: Decimal) -> Result<()> {
        let slot = self
            .limits
            .iter_mut()
            .find(|limit| limit.id == id)
            .ok_or(EngineError::NotFound { entity: "limit", id })?;
        slot.accumulated_amount += amount;
        Ok(())
    }
}

impl OwnershipResolver for MemoryStore {
    fn resolve_category(&self, id: Uuid, user_id: Uuid) -> Result<Category> {
        let category = self
            .categories
            .iter()
            .find(|category| category.id == id)
            .ok_or(EngineError::NotFound {
                entity: "category",
                id,
            })?;
        if category.user_id != user_id {
            return Err(EngineError::AccessDenied {
                entity: "category",
                id,
            });
        }
        Ok(category.clone())
    }

    fn resolve_wallet(&self, id: Uuid, user_id: Uuid) -> Result<Wallet> {
        let wallet = self
            .wallets
            .iter()
            .find(|wallet| wallet.id == id)
            .ok_or(EngineError::NotFound { entity: "wallet", id })?;
        if wallet.user_id != user_id {
            return Err(EngineError::AccessDenied {
                entity: "wallet",
                id,
            });
        }
        Ok(wallet.clone())
    }
}
