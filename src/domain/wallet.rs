//! Domain types representing user wallets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A money container owned by a single user. Limits attach to a wallet
/// together with a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub currency: String,
    pub balance: Decimal,
}

impl Wallet {
    pub fn new(user_id: Uuid, name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            currency: currency.into(),
            balance: Decimal::ZERO,
        }
    }
}

impl Identifiable for Wallet {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Wallet {
    fn name(&self) -> &str {
        &self.name
    }
}
