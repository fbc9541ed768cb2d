//! Errors surfaced by the order handlers.

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, IllegalTransition, OrderId, ValidationError,
};
use crate::domain::order::LifecycleError;

/// Order handler failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Submission rejected before anything was written.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Order not found: {0}")]
    NotFound(String),

    /// Requested status is not a legal next state; the order is unchanged.
    #[error(transparent)]
    IllegalTransition(IllegalTransition),

    /// Stored status is outside the lifecycle vocabulary.
    #[error("Status '{0}' is not a lifecycle state")]
    UnrecognizedStatus(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The order changed between loading and saving; nothing was written.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Destructive development operation invoked where it is disabled.
    #[error("Resetting orders is disabled")]
    ResetDisabled,

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl OrderError {
    pub fn not_found(id: OrderId) -> Self {
        OrderError::NotFound(id.to_string())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            OrderError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            OrderError::NotFound(_) => ErrorCode::OrderNotFound,
            OrderError::IllegalTransition(_) | OrderError::UnrecognizedStatus(_) => {
                ErrorCode::IllegalTransition
            }
            OrderError::Forbidden(_) | OrderError::ResetDisabled => ErrorCode::Forbidden,
            OrderError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            OrderError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<LifecycleError> for OrderError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::IllegalTransition(transition) => OrderError::IllegalTransition(transition),
            LifecycleError::UnrecognizedStatus(raw) => OrderError::UnrecognizedStatus(raw),
            LifecycleError::Forbidden(reason) => OrderError::Forbidden(reason),
        }
    }
}

impl From<DomainError> for OrderError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::OrderNotFound => OrderError::NotFound(err.message),
            ErrorCode::Forbidden => OrderError::Forbidden(err.message),
            ErrorCode::ConcurrencyConflict => OrderError::Conflict(err.message),
            _ => OrderError::Infrastructure(err.to_string()),
        }
    }
}
