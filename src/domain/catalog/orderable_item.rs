//! The denormalized browsing entity produced by the catalog join.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MenuItemId, VendorId};

/// Display name used when a menu item's vendor cannot be resolved.
pub const UNKNOWN_VENDOR_NAME: &str = "Unknown Vendor";

/// A menu item joined with its resolved vendor and an integer price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderableItem {
    pub id: MenuItemId,
    /// `VendorId::UNASSIGNED` when the vendor name matched nothing.
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl OrderableItem {
    /// Returns true if the vendor join fell back to the unassigned sentinel.
    pub fn has_unknown_vendor(&self) -> bool {
        self.vendor_id.is_unassigned()
    }
}
