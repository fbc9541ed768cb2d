//! Immutable view of the cart published after every mutation.

use serde::{Deserialize, Serialize};

use super::line::CartLine;
use crate::domain::foundation::VendorId;

/// Cart lines together with their derived totals.
///
/// Totals are computed from `lines` when the snapshot is built and are never
/// tracked separately, so they cannot drift from the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total_item_count: u32,
    pub total_price: i64,
}

impl CartSnapshot {
    /// Builds a snapshot, deriving totals from the lines.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let total_item_count = lines.iter().map(|line| line.quantity).sum();
        let total_price = lines.iter().map(CartLine::subtotal).sum();
        Self {
            lines,
            total_item_count,
            total_price,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Vendor shared by every line, if the cart is non-empty.
    pub fn vendor_id(&self) -> Option<VendorId> {
        self.lines.first().map(|line| line.vendor_id)
    }
}
