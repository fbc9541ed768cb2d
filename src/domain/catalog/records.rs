//! Raw catalog records as delivered by the remote catalog service.
//!
//! These are deliberately loose: menu items reference their vendor only by a
//! human-readable name, prices arrive as text, and most descriptive fields
//! are optional.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BuildingId, MenuItemId, Timestamp, VendorId};

/// A menu item exactly as listed by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    /// Textual price, e.g. `"15000.00"`.
    pub price: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Name of the owning vendor; the only link to the vendor list.
    pub vendor_name: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// A vendor ("tenant") record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// A building a consumer can have an order delivered to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl Building {
    /// Text used as the order's delivery address when this building is picked.
    pub fn delivery_label(&self) -> String {
        match self.address.as_deref().map(str::trim) {
            Some(address) if !address.is_empty() => format!("{}, {}", self.name.trim(), address),
            _ => self.name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(address: Option<&str>) -> Building {
        Building {
            id: BuildingId::new(1),
            name: "Gedung A ".to_string(),
            address: address.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn delivery_label_joins_name_and_address() {
        assert_eq!(
            building(Some("Jl. Kampus No. 1")).delivery_label(),
            "Gedung A, Jl. Kampus No. 1"
        );
    }

    #[test]
    fn delivery_label_falls_back_to_name() {
        assert_eq!(building(None).delivery_label(), "Gedung A");
        assert_eq!(building(Some("  ")).delivery_label(), "Gedung A");
    }
}
