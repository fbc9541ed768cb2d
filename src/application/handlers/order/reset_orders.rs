//! ResetOrdersHandler - Development-only wipe of all orders.

use std::sync::Arc;

use super::errors::OrderError;
use crate::ports::OrderRepository;

/// Handler that deletes every order and item.
///
/// Constructed disabled outside development; a disabled handler refuses
/// without touching the store.
pub struct ResetOrdersHandler {
    repository: Arc<dyn OrderRepository>,
    enabled: bool,
}

impl ResetOrdersHandler {
    pub fn new(repository: Arc<dyn OrderRepository>, enabled: bool) -> Self {
        Self {
            repository,
            enabled,
        }
    }

    /// Returns the number of orders removed.
    pub async fn handle(&self) -> Result<u64, OrderError> {
        if !self.enabled {
            tracing::warn!("Order reset refused");
            return Err(OrderError::ResetDisabled);
        }

        let removed = self.repository.reset().await?;
        tracing::warn!(removed, "All orders deleted");
        Ok(removed)
    }
}
