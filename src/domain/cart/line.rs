//! A single cart line.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::OrderableItem;
use crate::domain::foundation::{MenuItemId, VendorId};

/// One item in the cart with its quantity.
///
/// `quantity` is always at least 1; the [`Cart`](super::Cart) deletes a line
/// rather than letting it reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub unit_price: i64,
    pub quantity: u32,
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub note: Option<String>,
}

impl CartLine {
    /// A fresh line for an item at quantity 1.
    pub fn from_item(item: &OrderableItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
            vendor_id: item.vendor_id,
            vendor_name: item.vendor_name.clone(),
            note: None,
        }
    }

    /// `unit_price × quantity`.
    pub fn subtotal(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}
