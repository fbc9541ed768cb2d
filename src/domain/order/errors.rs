//! Order-specific error types.

use thiserror::Error;

use crate::domain::foundation::IllegalTransition;

/// Why a lifecycle change on an order was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Target status is not a legal next state of the current one.
    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition),

    /// Stored status is outside the known vocabulary.
    #[error("Status '{0}' is not a lifecycle state")]
    UnrecognizedStatus(String),

    /// The actor is not allowed to touch this order.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}
