//! Joins menu items to vendors by vendor name.
//!
//! The catalog service exposes no vendor id on menu items, only the vendor's
//! display name. Resolution is therefore a string match; unmatched names
//! degrade to [`VendorId::UNASSIGNED`] and [`UNKNOWN_VENDOR_NAME`].

use std::collections::HashMap;

use serde::Deserialize;

use super::orderable_item::{OrderableItem, UNKNOWN_VENDOR_NAME};
use super::price::parse_price;
use super::records::{MenuItem, Vendor};
use crate::domain::foundation::VendorId;

/// How strictly a menu item's vendor name must match a vendor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorMatch {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// Equality after lowercasing both sides.
    CaseInsensitive,
}

impl VendorMatch {
    /// Normalizes a vendor name into a lookup key.
    pub fn key(&self, name: &str) -> String {
        match self {
            VendorMatch::Exact => name.to_string(),
            VendorMatch::CaseInsensitive => name.to_lowercase(),
        }
    }

    /// Compares two vendor names under this strictness.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            VendorMatch::Exact => a == b,
            VendorMatch::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Lookup table from vendor name to vendor record.
#[derive(Debug, Clone)]
pub struct VendorIndex<'a> {
    mode: VendorMatch,
    by_name: HashMap<String, &'a Vendor>,
}

impl<'a> VendorIndex<'a> {
    /// Builds the index. When two vendors share a name the first one wins.
    pub fn new(vendors: &'a [Vendor], mode: VendorMatch) -> Self {
        let mut by_name = HashMap::with_capacity(vendors.len());
        for vendor in vendors {
            by_name.entry(mode.key(&vendor.name)).or_insert(vendor);
        }
        Self { mode, by_name }
    }

    /// Finds the vendor for a menu item's vendor name.
    pub fn resolve(&self, vendor_name: Option<&str>) -> Option<&'a Vendor> {
        vendor_name.and_then(|name| self.by_name.get(&self.mode.key(name)).copied())
    }
}

/// Produces one [`OrderableItem`] per menu item, preserving input order.
pub fn join_catalog(
    menu_items: &[MenuItem],
    vendors: &[Vendor],
    mode: VendorMatch,
) -> Vec<OrderableItem> {
    let index = VendorIndex::new(vendors, mode);

    menu_items
        .iter()
        .map(|item| {
            let (vendor_id, vendor_name) = match index.resolve(item.vendor_name.as_deref()) {
                Some(vendor) => (vendor.id, vendor.name.clone()),
                None => (VendorId::UNASSIGNED, UNKNOWN_VENDOR_NAME.to_string()),
            };

            OrderableItem {
                id: item.id,
                vendor_id,
                vendor_name,
                name: item.name.clone(),
                price: parse_price(&item.price),
                description: item.description.clone(),
                category: item.category.clone(),
                image: item.image.clone(),
            }
        })
        .collect()
}
