//! Order line items.

use serde::{Deserialize, Serialize};

use crate::domain::cart::CartLine;
use crate::domain::foundation::{MenuItemId, OrderId, VendorId};

/// A cart line frozen at submission time, before the order has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub item_id: MenuItemId,
    pub name: String,
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub price: i64,
    pub quantity: u32,
    pub note: Option<String>,
}

impl NewOrderItem {
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id,
            name: line.name.clone(),
            vendor_id: line.vendor_id,
            vendor_name: line.vendor_name.clone(),
            price: line.unit_price,
            quantity: line.quantity,
            note: line.note.clone(),
        }
    }

    pub fn attach(self, order_id: OrderId) -> OrderItem {
        OrderItem {
            order_id,
            item_id: self.item_id,
            name: self.name,
            vendor_id: self.vendor_id,
            vendor_name: self.vendor_name,
            price: self.price,
            quantity: self.quantity,
            note: self.note,
        }
    }
}

/// A persisted order line. Immutable once written.
///
/// Vendor and price are copies taken at submission, so later catalog changes
/// never alter historical receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub item_id: MenuItemId,
    pub name: String,
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub price: i64,
    pub quantity: u32,
    pub note: Option<String>,
}

impl OrderItem {
    pub fn subtotal(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}
