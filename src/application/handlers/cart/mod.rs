//! Cart command handlers.

mod cart_store;

pub use cart_store::{AddOutcome, CartStore, PendingConfirmation};
