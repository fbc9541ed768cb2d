//! Assembly of a cart snapshot into an unpersisted order.

use super::aggregate::Order;
use super::item::{NewOrderItem, OrderItem};
use super::status::OrderStatus;
use crate::domain::cart::CartLine;
use crate::domain::foundation::{ConsumerId, OrderId, Timestamp, ValidationError};

/// Order header and items ready to be written as one unit.
///
/// The total is computed here, once, from the submitted lines and is never
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub consumer_id: ConsumerId,
    pub delivery_address: String,
    pub proof_image: Option<String>,
    pub total_price: i64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub items: Vec<NewOrderItem>,
}

impl OrderDraft {
    /// Validates and freezes a set of cart lines.
    ///
    /// # Errors
    ///
    /// - `EmptyField("cart")` if there are no lines
    /// - `EmptyField("delivery_address")` if the address is blank
    pub fn assemble(
        lines: &[CartLine],
        consumer_id: ConsumerId,
        delivery_address: &str,
        proof_image: Option<String>,
    ) -> Result<Self, ValidationError> {
        if lines.is_empty() {
            return Err(ValidationError::empty_field("cart"));
        }
        let delivery_address = delivery_address.trim();
        if delivery_address.is_empty() {
            return Err(ValidationError::empty_field("delivery_address"));
        }

        let items: Vec<NewOrderItem> = lines.iter().map(NewOrderItem::from_line).collect();
        let total_price = lines.iter().map(CartLine::subtotal).sum();

        Ok(Self {
            consumer_id,
            delivery_address: delivery_address.to_string(),
            proof_image: proof_image.filter(|reference| !reference.trim().is_empty()),
            total_price,
            status: OrderStatus::INITIAL,
            created_at: Timestamp::now(),
            items,
        })
    }

    /// Materializes the order once the store has assigned its id.
    pub fn into_order(self, id: OrderId) -> (Order, Vec<OrderItem>) {
        let order = Order::reconstitute(
            id,
            self.consumer_id,
            self.total_price,
            self.status.into(),
            self.created_at,
            self.delivery_address,
            self.proof_image,
            None,
        );
        let items = self.items.into_iter().map(|item| item.attach(id)).collect();
        (order, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MenuItemId, VendorId};

    fn line(id: i64, price: i64, quantity: u32) -> CartLine {
        CartLine {
            item_id: MenuItemId::new(id),
            name: format!("Item {}", id),
            unit_price: price,
            quantity,
            vendor_id: VendorId::new(5),
            vendor_name: "Kedai Kopi".to_string(),
            note: None,
        }
    }

    fn consumer() -> ConsumerId {
        ConsumerId::new("mahasiswa-1").unwrap()
    }

    #[test]
    fn assembles_total_from_lines() {
        let draft = OrderDraft::assemble(
            &[line(1, 1000, 2), line(2, 2000, 1)],
            consumer(),
            "Gedung A",
            None,
        )
        .unwrap();

        assert_eq!(draft.total_price, 4000);
        assert_eq!(draft.status, OrderStatus::Diterima);
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.items[0].vendor_name, "Kedai Kopi");
    }

    #[test]
    fn rejects_empty_cart() {
        let err = OrderDraft::assemble(&[], consumer(), "Gedung A", None).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("cart"));
    }

    #[test]
    fn rejects_blank_address() {
        let err = OrderDraft::assemble(&[line(1, 1000, 1)], consumer(), "   ", None).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("delivery_address"));
    }

    #[test]
    fn blank_proof_reference_is_dropped() {
        let draft =
            OrderDraft::assemble(&[line(1, 1000, 1)], consumer(), "Gedung A", Some(" ".into()))
                .unwrap();
        assert_eq!(draft.proof_image, None);
    }

    #[test]
    fn into_order_stamps_id_on_items() {
        let draft =
            OrderDraft::assemble(&[line(1, 1000, 1)], consumer(), " Gedung A ", None).unwrap();
        let (order, items) = draft.into_order(OrderId::new(12));

        assert_eq!(order.id(), OrderId::new(12));
        assert_eq!(order.delivery_address(), "Gedung A");
        assert_eq!(items[0].order_id, OrderId::new(12));
    }
}
