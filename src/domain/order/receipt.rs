//! Vendor-grouped receipt projection.

use serde::Serialize;

use super::item::OrderItem;
use crate::domain::foundation::VendorId;

/// Items of one vendor within an order, with their subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorGroup {
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
}

/// Groups order items by vendor name, in order of first appearance.
///
/// Display only; nothing here is stored.
pub fn group_by_vendor(items: &[OrderItem]) -> Vec<VendorGroup> {
    let mut groups: Vec<VendorGroup> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|g| g.vendor_name == item.vendor_name) {
            Some(group) => {
                group.subtotal += item.subtotal();
                group.items.push(item.clone());
            }
            None => groups.push(VendorGroup {
                vendor_id: item.vendor_id,
                vendor_name: item.vendor_name.clone(),
                items: vec![item.clone()],
                subtotal: item.subtotal(),
            }),
        }
    }

    groups
}
