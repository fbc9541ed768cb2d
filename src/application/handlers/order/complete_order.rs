//! CompleteOrderHandler - Consumer confirms an order was received.

use std::sync::Arc;

use super::errors::OrderError;
use super::views::OrderView;
use crate::domain::foundation::{ConsumerId, OrderId};
use crate::ports::OrderRepository;

/// Command to mark an order as received.
#[derive(Debug, Clone)]
pub struct CompleteOrderCommand {
    pub order_id: OrderId,
    pub consumer_id: ConsumerId,
}

/// Handler for consumer-side completion.
pub struct CompleteOrderHandler {
    repository: Arc<dyn OrderRepository>,
}

impl CompleteOrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CompleteOrderCommand) -> Result<OrderView, OrderError> {
        let mut order = self
            .repository
            .find_by_id(cmd.order_id)
            .await?
            .ok_or_else(|| OrderError::not_found(cmd.order_id))?;

        let loaded = order.revision();
        let previous = order.complete(&cmd.consumer_id)?;
        self.repository.update(&order, &loaded).await?;

        tracing::info!(
            order_id = %cmd.order_id,
            consumer_id = %cmd.consumer_id,
            from = %previous,
            "Order completed by consumer"
        );

        Ok(OrderView::from(&order))
    }
}
