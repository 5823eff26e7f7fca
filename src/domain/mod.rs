pub mod category;
pub mod common;
pub mod limit;
pub mod snapshot;
pub mod wallet;

pub use category::Category;
pub use limit::{DateSpan, LimitEntity, LimitKind};
pub use snapshot::{BudgetStatus, GoalStatus, ProgressSnapshot, ProgressStatus};
pub use wallet::Wallet;
