//! Cart aggregate.
//!
//! # Invariants
//!
//! - At most one line per item id; re-adding an item bumps its quantity
//! - Every line of a non-empty cart has the same vendor id
//! - Quantities are always >= 1

use super::line::CartLine;
use super::snapshot::CartSnapshot;
use crate::domain::catalog::OrderableItem;
use crate::domain::foundation::{MenuItemId, VendorId};

/// Returned by [`Cart::add`] when the item belongs to another vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorConflict {
    pub cart_vendor_id: VendorId,
    pub cart_vendor_name: String,
    pub candidate_vendor_id: VendorId,
}

/// The consumer's in-progress selection, restricted to one vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Vendor the cart is currently locked to.
    pub fn vendor_id(&self) -> Option<VendorId> {
        self.lines.first().map(|line| line.vendor_id)
    }

    /// Quantity of the given item, 0 if absent.
    pub fn quantity_of(&self, item_id: MenuItemId) -> u32 {
        self.line(item_id).map_or(0, |line| line.quantity)
    }

    fn line(&self, item_id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    fn position(&self, item_id: MenuItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.item_id == item_id)
    }

    /// Merges an item into the cart.
    ///
    /// Returns the line's new quantity, or a [`VendorConflict`] without
    /// touching the cart when the item's vendor differs from the cart's.
    pub fn add(&mut self, item: &OrderableItem) -> Result<u32, VendorConflict> {
        if let Some(first) = self.lines.first() {
            if first.vendor_id != item.vendor_id {
                return Err(VendorConflict {
                    cart_vendor_id: first.vendor_id,
                    cart_vendor_name: first.vendor_name.clone(),
                    candidate_vendor_id: item.vendor_id,
                });
            }
        }

        match self.position(item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity += 1;
                Ok(line.quantity)
            }
            None => {
                self.lines.push(CartLine::from_item(item));
                Ok(1)
            }
        }
    }

    /// Empties the cart and adds `item` as its only line.
    pub fn replace_with(&mut self, item: &OrderableItem) {
        self.lines.clear();
        self.lines.push(CartLine::from_item(item));
    }

    /// Decrements an item's quantity, deleting the line at zero.
    ///
    /// Returns false if no line exists for the item.
    pub fn remove(&mut self, item_id: MenuItemId) -> bool {
        let Some(index) = self.position(item_id) else {
            return false;
        };

        if self.lines[index].quantity <= 1 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity -= 1;
        }
        true
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Replaces the note on an item's line. Blank notes are stored as `None`.
    ///
    /// Returns false if no line exists for the item.
    pub fn set_note(&mut self, item_id: MenuItemId, note: Option<String>) -> bool {
        let Some(index) = self.position(item_id) else {
            return false;
        };
        self.lines[index].note = note.filter(|text| !text.trim().is_empty());
        true
    }

    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> i64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Lines and totals as one consistent value.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from_lines(self.lines.clone())
    }
}
