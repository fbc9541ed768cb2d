//! ListOrdersHandler - Consumer and courier listings over the same orders.

use std::sync::Arc;

use super::errors::OrderError;
use super::views::OrderView;
use crate::domain::foundation::{ConsumerId, CourierId, StateMachine};
use crate::domain::order::Order;
use crate::ports::OrderRepository;

/// Which orders to list. Every listing is newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOrdersQuery {
    /// Every order.
    All,
    /// Unclaimed orders a courier can still pick up.
    Available,
    /// Orders claimed by one courier.
    ByCourier(CourierId),
    /// Order history of one consumer.
    ByConsumer(ConsumerId),
}

/// Handler for order listings.
pub struct ListOrdersHandler {
    repository: Arc<dyn OrderRepository>,
}

impl ListOrdersHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListOrdersQuery) -> Result<Vec<OrderView>, OrderError> {
        let orders = match &query {
            ListOrdersQuery::All => self.repository.list_all().await?,
            ListOrdersQuery::Available => self
                .repository
                .list_all()
                .await?
                .into_iter()
                .filter(is_available)
                .collect(),
            ListOrdersQuery::ByCourier(courier_id) => {
                self.repository.list_by_courier(courier_id).await?
            }
            ListOrdersQuery::ByConsumer(consumer_id) => {
                self.repository.list_by_consumer(consumer_id).await?
            }
        };

        Ok(orders.iter().map(OrderView::from).collect())
    }
}

fn is_available(order: &Order) -> bool {
    order.courier_id().is_none()
        && order
            .status()
            .known()
            .map_or(false, |status| !status.is_terminal())
}
