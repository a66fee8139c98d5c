use crate::types::RequestStatus;
use diesel::result::DatabaseErrorKind;
use thiserror::Error;

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Failure taxonomy surfaced by every workflow call. Each kind stays
/// distinguishable across the boundary so the caller can render a specific
/// message, in particular "already joined" for [`WorkflowError::Duplicate`].
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not authorized: {0}")]
    Auth(String),

    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("duplicate record: {0}")]
    Duplicate(String),

    #[error("persistence failure: {0}")]
    Persistence(diesel::result::Error),
}

impl From<diesel::result::Error> for WorkflowError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                WorkflowError::Duplicate(info.message().to_string())
            }
            other => WorkflowError::Persistence(other),
        }
    }
}

impl WorkflowError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, WorkflowError::Duplicate(_))
    }
}
