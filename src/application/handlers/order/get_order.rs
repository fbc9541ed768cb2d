//! GetOrderHandler - Query handler for a single order with its receipt.

use std::sync::Arc;

use super::errors::OrderError;
use super::views::OrderDetail;
use crate::domain::foundation::OrderId;
use crate::ports::OrderRepository;

/// Query for one order.
#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    pub order_id: OrderId,
}

/// Handler for retrieving an order, its items and the receipt projection.
pub struct GetOrderHandler {
    repository: Arc<dyn OrderRepository>,
}

impl GetOrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetOrderQuery) -> Result<OrderDetail, OrderError> {
        let order = self
            .repository
            .find_by_id(query.order_id)
            .await?
            .ok_or_else(|| OrderError::not_found(query.order_id))?;

        let items = self.repository.find_items(query.order_id).await?;

        Ok(OrderDetail::new(&order, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryOrderRepository;
    use crate::domain::cart::CartLine;
    use crate::domain::foundation::{ConsumerId, MenuItemId, VendorId};
    use crate::domain::order::OrderDraft;

    fn line(id: i64, vendor: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            item_id: MenuItemId::new(id),
            name: format!("Item {}", id),
            unit_price: price,
            quantity,
            vendor_id: VendorId::new(7),
            vendor_name: vendor.to_string(),
            note: None,
        }
    }

    #[tokio::test]
    async fn returns_order_items_and_receipt() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let draft = OrderDraft::assemble(
            &[line(1, "Kantin Bu Sri", 1000, 2), line(2, "Kantin Bu Sri", 2000, 1)],
            ConsumerId::new("mahasiswa-1").unwrap(),
            "Gedung A",
            None,
        )
        .unwrap();
        let order_id = repo.insert(&draft).await.unwrap();
        let handler = GetOrderHandler::new(repo);

        let detail = handler.handle(GetOrderQuery { order_id }).await.unwrap();

        assert_eq!(detail.order.status, "diterima");
        assert_eq!(detail.order.status_label, "Diterima");
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.receipt.len(), 1);
        assert_eq!(detail.receipt[0].subtotal, 4000);
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let handler = GetOrderHandler::new(Arc::new(InMemoryOrderRepository::new()));

        let err = handler
            .handle(GetOrderQuery {
                order_id: OrderId::new(404),
            })
            .await
            .unwrap_err();

        assert_eq!(err, OrderError::NotFound("404".to_string()));
    }
}
