//! Order domain module.
//!
//! Covers assembling a cart into an order ([`OrderDraft`]), the persisted
//! [`Order`] aggregate with its delivery lifecycle ([`OrderStatus`]), the
//! immutable [`OrderItem`]s and the vendor-grouped receipt projection.

mod aggregate;
mod draft;
mod errors;
mod item;
mod receipt;
mod status;

pub use aggregate::{Order, OrderRevision};
pub use draft::OrderDraft;
pub use errors::LifecycleError;
pub use item::{NewOrderItem, OrderItem};
pub use receipt::{group_by_vendor, VendorGroup};
pub use status::{OrderStatus, StoredStatus};
