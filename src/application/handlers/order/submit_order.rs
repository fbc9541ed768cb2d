//! SubmitOrderHandler - Turns the cart into a persisted order.

use std::sync::Arc;

use super::errors::OrderError;
use crate::application::handlers::cart::CartStore;
use crate::domain::foundation::{ConsumerId, OrderId};
use crate::domain::order::OrderDraft;
use crate::ports::OrderRepository;

/// Command to submit the current cart.
#[derive(Debug, Clone)]
pub struct SubmitOrderCommand {
    pub consumer_id: ConsumerId,
    pub delivery_address: String,
    pub proof_image: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitOrderResult {
    pub order_id: OrderId,
    pub total_price: i64,
    pub item_count: usize,
}

/// Handler for order submission.
pub struct SubmitOrderHandler {
    repository: Arc<dyn OrderRepository>,
}

impl SubmitOrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Validates the cart, writes the order and its items atomically, then
    /// clears the cart.
    ///
    /// On any failure the cart is left exactly as it was.
    pub async fn handle(
        &self,
        cart: &mut CartStore,
        cmd: SubmitOrderCommand,
    ) -> Result<SubmitOrderResult, OrderError> {
        // 1. Validate and freeze the lines
        let snapshot = cart.snapshot();
        let draft = OrderDraft::assemble(
            &snapshot.lines,
            cmd.consumer_id,
            &cmd.delivery_address,
            cmd.proof_image,
        )?;

        // 2. Persist header and items together
        let order_id = self.repository.insert(&draft).await.map_err(|err| {
            tracing::error!(error = %err, consumer_id = %draft.consumer_id, "Order submission failed");
            OrderError::from(err)
        })?;

        // 3. Clear the cart only once the order exists
        cart.clear();

        tracing::info!(
            %order_id,
            consumer_id = %draft.consumer_id,
            total_price = draft.total_price,
            items = draft.items.len(),
            "Order submitted"
        );

        Ok(SubmitOrderResult {
            order_id,
            total_price: draft.total_price,
            item_count: draft.items.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryOrderRepository;
    use crate::domain::catalog::OrderableItem;
    use crate::domain::foundation::{ErrorCode, MenuItemId, VendorId};
    use crate::domain::order::OrderStatus;

    fn item(id: i64, price: i64) -> OrderableItem {
        OrderableItem {
            id: MenuItemId::new(id),
            vendor_id: VendorId::new(7),
            vendor_name: "Kantin Bu Sri".to_string(),
            name: format!("Item {}", id),
            price,
            description: None,
            category: None,
            image: None,
        }
    }

    fn filled_cart() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item(&item(1, 1000));
        cart.add_item(&item(1, 1000));
        cart.add_item(&item(2, 2000));
        cart
    }

    fn command(address: &str) -> SubmitOrderCommand {
        SubmitOrderCommand {
            consumer_id: ConsumerId::new("mahasiswa-1").unwrap(),
            delivery_address: address.to_string(),
            proof_image: Some("proofs/123.jpg".to_string()),
        }
    }

    #[tokio::test]
    async fn submits_order_and_clears_cart() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = SubmitOrderHandler::new(repo.clone());
        let mut cart = filled_cart();

        let result = handler.handle(&mut cart, command("Gedung A")).await.unwrap();

        assert_eq!(result.total_price, 4000);
        assert_eq!(result.item_count, 2);
        assert!(cart.snapshot().is_empty());

        let order = repo.find_by_id(result.order_id).await.unwrap().unwrap();
        assert_eq!(order.total_price(), 4000);
        assert_eq!(order.lifecycle_status(), Ok(OrderStatus::Diterima));
        assert_eq!(order.proof_image(), Some("proofs/123.jpg"));
    }

    #[tokio::test]
    async fn empty_cart_is_rejected_without_writing() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = SubmitOrderHandler::new(repo.clone());
        let mut cart = CartStore::new();

        let err = handler.handle(&mut cart, command("Gedung A")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::EmptyField);
        assert_eq!(repo.order_count().await, 0);
    }

    #[tokio::test]
    async fn blank_address_is_rejected_and_cart_kept() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = SubmitOrderHandler::new(repo.clone());
        let mut cart = filled_cart();
        let before = cart.snapshot();

        let err = handler.handle(&mut cart, command("  ")).await.unwrap_err();

        assert!(matches!(err, OrderError::Validation(_)));
        assert_eq!(cart.snapshot(), before);
        assert_eq!(repo.order_count().await, 0);
    }

    #[tokio::test]
    async fn persistence_failure_leaves_cart_untouched() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        repo.reject_writes(true).await;
        let handler = SubmitOrderHandler::new(repo.clone());
        let mut cart = filled_cart();
        let before = cart.snapshot();

        let err = handler.handle(&mut cart, command("Gedung A")).await.unwrap_err();

        assert!(matches!(err, OrderError::Infrastructure(_)));
        assert_eq!(cart.snapshot(), before);
        assert_eq!(repo.item_count().await, 0);
    }
}
