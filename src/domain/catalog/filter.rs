//! Post-join projections over the catalog.

use serde::{Deserialize, Serialize};

use super::join::VendorMatch;
use super::orderable_item::OrderableItem;

/// Optional predicate applied after the vendor join.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum CatalogFilter {
    #[default]
    All,
    /// Items whose category equals the given value.
    Category(String),
    /// Items whose resolved vendor name matches the given value.
    VendorName(String),
}

impl CatalogFilter {
    /// Returns true if the item passes this filter.
    ///
    /// Vendor-name filtering uses the same strictness as the join so the two
    /// never disagree about which vendor an item belongs to.
    pub fn matches(&self, item: &OrderableItem, mode: VendorMatch) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Category(category) => item.category.as_deref() == Some(category.as_str()),
            CatalogFilter::VendorName(name) => mode.matches(&item.vendor_name, name),
        }
    }

    /// Applies the filter to a joined item list.
    pub fn apply(&self, items: &[OrderableItem], mode: VendorMatch) -> Vec<OrderableItem> {
        items
            .iter()
            .filter(|item| self.matches(item, mode))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MenuItemId, VendorId};

    fn item(id: i64, vendor: &str, category: Option<&str>) -> OrderableItem {
        OrderableItem {
            id: MenuItemId::new(id),
            vendor_id: VendorId::new(1),
            vendor_name: vendor.to_string(),
            name: format!("Item {}", id),
            price: 1000,
            description: None,
            category: category.map(str::to_string),
            image: None,
        }
    }

    fn catalog() -> Vec<OrderableItem> {
        vec![
            item(1, "Kedai Kopi", Some("minuman")),
            item(2, "Warung Bu Sri", Some("makanan")),
            item(3, "Kedai Kopi", Some("makanan")),
            item(4, "Kedai Kopi", None),
        ]
    }

    #[test]
    fn all_keeps_everything() {
        assert_eq!(CatalogFilter::All.apply(&catalog(), VendorMatch::Exact).len(), 4);
    }

    #[test]
    fn filters_by_category() {
        let items = CatalogFilter::Category("makanan".into()).apply(&catalog(), VendorMatch::Exact);
        let ids: Vec<i64> = items.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn filters_by_vendor_name() {
        let items = CatalogFilter::VendorName("Kedai Kopi".into()).apply(&catalog(), VendorMatch::Exact);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn vendor_filter_follows_match_strictness() {
        let filter = CatalogFilter::VendorName("kedai kopi".into());
        assert!(filter.apply(&catalog(), VendorMatch::Exact).is_empty());
        assert_eq!(filter.apply(&catalog(), VendorMatch::CaseInsensitive).len(), 3);
    }
}
