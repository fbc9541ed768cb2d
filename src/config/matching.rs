//! Catalog join configuration

use serde::Deserialize;

use crate::domain::catalog::VendorMatch;

/// How menu items are matched to vendors
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Vendor-name comparison: `exact` (default) or `case_insensitive`
    #[serde(default)]
    pub vendor_name: VendorMatch,
}
