//! Storage collaborator boundary.
//!
//! The engine never talks to a database directly; it consumes these traits.
//! [`MemoryStore`] backs the services in tests and embedded use,
//! [`JsonStore`] persists a profile snapshot to disk.

pub mod json_backend;
pub mod memory;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::{Category, LimitEntity, LimitKind, Wallet},
    errors::EngineError,
};

pub use json_backend::{JsonStore, Profile};
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Persistence of limit entities. Listing preserves insertion order so the
/// dashboard keeps a stable row order.
pub trait LimitStore {
    fn list_for_user(&self, user_id: Uuid, kind: LimitKind) -> Result<Vec<LimitEntity>>;
    fn list_for_category_wallet(
        &self,
        category_id: Uuid,
        wallet_id: Uuid,
        kind: LimitKind,
    ) -> Result<Vec<LimitEntity>>;
    fn get(&self, id: Uuid) -> Result<Option<LimitEntity>>;
    fn insert(&mut self, entity: LimitEntity) -> Result<()>;
    fn update(&mut self, entity: LimitEntity) -> Result<()>;
    fn remove(&mut self, id: Uuid) -> Result<()>;
    /// Monotonic increment hook called by the transaction-posting path.
    fn add_accumulated(&mut self, id: Uuid, amount: Decimal) -> Result<()>;
}

/// Resolves referenced entities and enforces that they belong to the acting
/// user before any validation or calculation runs.
pub trait OwnershipResolver {
    fn resolve_category(&self, id: Uuid, user_id: Uuid) -> Result<Category>;
    fn resolve_wallet(&self, id: Uuid, user_id: Uuid) -> Result<Wallet>;
}
