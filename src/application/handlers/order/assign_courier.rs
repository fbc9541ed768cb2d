//! AssignCourierHandler - Courier claims an order without changing its status.

use std::sync::Arc;

use super::errors::OrderError;
use super::views::OrderView;
use crate::domain::foundation::{CourierId, OrderId};
use crate::ports::OrderRepository;

/// Command to claim an order.
#[derive(Debug, Clone)]
pub struct AssignCourierCommand {
    pub order_id: OrderId,
    pub courier_id: CourierId,
}

/// Handler for courier assignment.
pub struct AssignCourierHandler {
    repository: Arc<dyn OrderRepository>,
}

impl AssignCourierHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AssignCourierCommand) -> Result<OrderView, OrderError> {
        let mut order = self
            .repository
            .find_by_id(cmd.order_id)
            .await?
            .ok_or_else(|| OrderError::not_found(cmd.order_id))?;

        let loaded = order.revision();
        order.assign_courier(&cmd.courier_id)?;
        self.repository.update(&order, &loaded).await?;

        tracing::info!(
            order_id = %cmd.order_id,
            courier_id = %cmd.courier_id,
            "Courier assigned"
        );

        Ok(OrderView::from(&order))
    }
}
