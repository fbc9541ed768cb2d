//! AdvanceStatusHandler - Courier moves an order along its lifecycle.

use std::sync::Arc;

use super::errors::OrderError;
use super::views::OrderView;
use crate::domain::foundation::{CourierId, OrderId};
use crate::domain::order::OrderStatus;
use crate::ports::OrderRepository;

/// Command to advance an order to `target`.
#[derive(Debug, Clone)]
pub struct AdvanceStatusCommand {
    pub order_id: OrderId,
    pub courier_id: CourierId,
    pub target: OrderStatus,
}

/// Result of a successful status change.
#[derive(Debug, Clone)]
pub struct AdvanceStatusResult {
    pub order: OrderView,
    pub previous: OrderStatus,
}

/// Handler for courier status changes.
pub struct AdvanceStatusHandler {
    repository: Arc<dyn OrderRepository>,
}

impl AdvanceStatusHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AdvanceStatusCommand) -> Result<AdvanceStatusResult, OrderError> {
        // 1. Load order
        let mut order = self
            .repository
            .find_by_id(cmd.order_id)
            .await?
            .ok_or_else(|| OrderError::not_found(cmd.order_id))?;

        let loaded = order.revision();

        // 2. Transition; an illegal request leaves the order untouched
        let previous = order.advance(&cmd.courier_id, cmd.target).map_err(|err| {
            tracing::warn!(
                order_id = %cmd.order_id,
                courier_id = %cmd.courier_id,
                target = %cmd.target,
                error = %err,
                "Status change rejected"
            );
            OrderError::from(err)
        })?;

        // 3. Persist, unless someone else changed the order meanwhile
        self.repository.update(&order, &loaded).await?;

        tracing::info!(
            order_id = %cmd.order_id,
            courier_id = %cmd.courier_id,
            from = %previous,
            to = %cmd.target,
            "Order status advanced"
        );

        Ok(AdvanceStatusResult {
            order: OrderView::from(&order),
            previous,
        })
    }
}
