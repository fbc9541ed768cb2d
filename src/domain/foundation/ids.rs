//! Strongly-typed identifier value objects.
//!
//! Catalog and order identifiers are integers assigned by the remote catalog
//! service or by the order store. Actor identifiers (consumer, courier) are
//! opaque strings handed over by the authentication collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Generates an integer-backed identifier newtype.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw integer identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw integer value.
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a menu item in the remote catalog.
    MenuItemId
);

numeric_id!(
    /// Identifier of a vendor ("tenant") in the remote catalog.
    ///
    /// `VendorId::UNASSIGNED` (0) marks menu items whose vendor name could not
    /// be resolved against the vendor list.
    VendorId
);

numeric_id!(
    /// Identifier of a building used for delivery-address selection.
    BuildingId
);

numeric_id!(
    /// Identifier of a persisted order, assigned by the order store.
    OrderId
);

impl VendorId {
    /// Sentinel for menu items with no matching vendor record.
    pub const UNASSIGNED: VendorId = VendorId(0);

    /// Returns true if this is the unassigned sentinel.
    pub fn is_unassigned(&self) -> bool {
        *self == Self::UNASSIGNED
    }
}

/// Consumer identifier (from the authentication collaborator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsumerId(String);

impl ConsumerId {
    /// Creates a new ConsumerId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("consumer_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConsumerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Courier identifier (from the authentication collaborator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourierId(String);

impl CourierId {
    /// Creates a new CourierId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("courier_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_id_unassigned_is_zero() {
        assert_eq!(VendorId::UNASSIGNED.value(), 0);
        assert!(VendorId::new(0).is_unassigned());
        assert!(!VendorId::new(7).is_unassigned());
    }

    #[test]
    fn numeric_id_parses_from_str() {
        let id: MenuItemId = " 42 ".parse().unwrap();
        assert_eq!(id, MenuItemId::new(42));
        assert!("abc".parse::<OrderId>().is_err());
    }

    #[test]
    fn numeric_id_displays_raw_value() {
        assert_eq!(OrderId::new(9).to_string(), "9");
    }

    #[test]
    fn numeric_id_serializes_transparently() {
        let json = serde_json::to_string(&VendorId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn consumer_id_rejects_blank() {
        assert!(ConsumerId::new("").is_err());
        assert!(ConsumerId::new("   ").is_err());
        assert_eq!(ConsumerId::new("user-1").unwrap().as_str(), "user-1");
    }

    #[test]
    fn courier_id_rejects_blank() {
        assert!(CourierId::new("").is_err());
        assert_eq!(CourierId::new("kurir-1").unwrap().to_string(), "kurir-1");
    }
}
