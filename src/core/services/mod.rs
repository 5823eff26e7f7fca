pub mod limit_service;
pub mod progress_service;

pub use limit_service::{LimitDraft, LimitService};
pub use progress_service::{ProgressRow, ProgressService, RowOutcome};

use crate::errors::EngineError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{0}")]
    Invalid(String),
}
