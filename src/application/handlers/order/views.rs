//! Read models returned by the order handlers.

use serde::Serialize;

use crate::domain::foundation::{ConsumerId, CourierId, OrderId, Timestamp};
use crate::domain::order::{group_by_vendor, Order, OrderItem, VendorGroup};

/// Flat, display-ready view of an order header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub consumer_id: ConsumerId,
    pub total_price: i64,
    /// Raw status code as stored.
    pub status: String,
    pub status_label: String,
    pub created_at: Timestamp,
    pub delivery_address: String,
    pub proof_image: Option<String>,
    pub courier_id: Option<CourierId>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            consumer_id: order.consumer_id().clone(),
            total_price: order.total_price(),
            status: order.status().as_str().to_string(),
            status_label: order.status().display_label(),
            created_at: *order.created_at(),
            delivery_address: order.delivery_address().to_string(),
            proof_image: order.proof_image().map(str::to_string),
            courier_id: order.courier_id().cloned(),
        }
    }
}

/// An order with its items and the vendor-grouped receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetail {
    pub order: OrderView,
    pub items: Vec<OrderItem>,
    pub receipt: Vec<VendorGroup>,
}

impl OrderDetail {
    pub fn new(order: &Order, items: Vec<OrderItem>) -> Self {
        let receipt = group_by_vendor(&items);
        Self {
            order: OrderView::from(order),
            items,
            receipt,
        }
    }
}
