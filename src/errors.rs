use thiserror::Error;
use uuid::Uuid;

use crate::domain::limit::LimitKind;

/// Error type covering engine validation, ownership, and storage failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("date range overlaps an existing {0} for this category and wallet")]
    Overlap(LimitKind),
    #[error("{entity} {id} is not owned by the requesting user")]
    AccessDenied { entity: &'static str, id: Uuid },
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl EngineError {
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation(message.into())
    }
}
