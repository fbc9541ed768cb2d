//! Catalog domain module.
//!
//! Turns three weakly-keyed remote collections (menu items, vendors,
//! buildings) into a single list of [`OrderableItem`]s.
//!
//! # Rules
//!
//! - Menu items reference vendors by name only; see [`join_catalog`]
//! - Textual prices are normalized by [`parse_price`], never failing an item
//! - Filters are projections over the joined list, see [`CatalogFilter`]

mod filter;
mod join;
mod load_phase;
mod orderable_item;
mod price;
mod records;

pub use filter::CatalogFilter;
pub use join::{join_catalog, VendorIndex, VendorMatch};
pub use load_phase::{CatalogSnapshot, LoadPhase};
pub use orderable_item::{OrderableItem, UNKNOWN_VENDOR_NAME};
pub use price::parse_price;
pub use records::{Building, MenuItem, Vendor};
