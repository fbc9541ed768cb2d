//! CartStore - Owns the consumer's cart and publishes its snapshots.
//!
//! Mutations take `&mut self`, so there is exactly one writer at a time.
//! After each effective mutation the lines and their totals are published
//! together on a watch channel.
//!
//! Adding an item from a different vendor does not touch the cart. Instead a
//! [`PendingConfirmation`] is returned; only the most recent one can be
//! confirmed.

use tokio::sync::watch;

use crate::domain::cart::{Cart, CartSnapshot, VendorConflict};
use crate::domain::catalog::OrderableItem;
use crate::domain::foundation::{MenuItemId, VendorId};

/// A cross-vendor add waiting for the consumer's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub candidate: OrderableItem,
    pub cart_vendor_id: VendorId,
    pub cart_vendor_name: String,
    ticket: u64,
}

/// Result of [`CartStore::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was merged into the cart.
    Added(CartSnapshot),
    /// The item belongs to another vendor; nothing changed yet.
    NeedsConfirmation(PendingConfirmation),
}

/// Single-writer cart with a subscribable snapshot stream.
pub struct CartStore {
    cart: Cart,
    next_ticket: u64,
    pending_ticket: Option<u64>,
    state: watch::Sender<CartSnapshot>,
}

impl CartStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(CartSnapshot::default());
        Self {
            cart: Cart::new(),
            next_ticket: 0,
            pending_ticket: None,
            state,
        }
    }

    /// Observe the cart. The receiver starts at the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.state.borrow().clone()
    }

    /// Returns true if a cross-vendor add is awaiting confirmation.
    pub fn has_pending(&self) -> bool {
        self.pending_ticket.is_some()
    }

    /// Adds one unit of `item`.
    pub fn add_item(&mut self, item: &OrderableItem) -> AddOutcome {
        match self.cart.add(item) {
            Ok(quantity) => {
                tracing::debug!(item_id = %item.id, quantity, "Item added to cart");
                AddOutcome::Added(self.publish())
            }
            Err(VendorConflict {
                cart_vendor_id,
                cart_vendor_name,
                candidate_vendor_id,
            }) => {
                self.next_ticket += 1;
                self.pending_ticket = Some(self.next_ticket);
                tracing::debug!(
                    item_id = %item.id,
                    %cart_vendor_id,
                    %candidate_vendor_id,
                    "Cross-vendor add awaiting confirmation"
                );
                AddOutcome::NeedsConfirmation(PendingConfirmation {
                    candidate: item.clone(),
                    cart_vendor_id,
                    cart_vendor_name,
                    ticket: self.next_ticket,
                })
            }
        }
    }

    /// Replaces the cart with the pending candidate at quantity 1.
    ///
    /// Returns `None` if `pending` was replaced or already resolved.
    pub fn confirm(&mut self, pending: &PendingConfirmation) -> Option<CartSnapshot> {
        if self.pending_ticket != Some(pending.ticket) {
            tracing::debug!(item_id = %pending.candidate.id, "Ignoring outdated confirmation");
            return None;
        }
        self.pending_ticket = None;
        self.cart.replace_with(&pending.candidate);
        tracing::debug!(
            item_id = %pending.candidate.id,
            vendor_id = %pending.candidate.vendor_id,
            "Cart replaced with item from another vendor"
        );
        Some(self.publish())
    }

    /// Drops `pending` without touching the cart.
    pub fn dismiss(&mut self, pending: &PendingConfirmation) {
        if self.pending_ticket == Some(pending.ticket) {
            self.pending_ticket = None;
        }
    }

    /// Removes one unit of an item; absent items are ignored.
    pub fn remove_item(&mut self, item_id: MenuItemId) -> CartSnapshot {
        if self.cart.remove(item_id) {
            tracing::debug!(%item_id, "Item removed from cart");
            self.publish()
        } else {
            self.snapshot()
        }
    }

    pub fn clear(&mut self) -> CartSnapshot {
        self.cart.clear();
        self.publish()
    }

    /// Sets the note on an item's line; absent items are ignored.
    pub fn set_note(&mut self, item_id: MenuItemId, note: Option<String>) -> CartSnapshot {
        if self.cart.set_note(item_id, note) {
            self.publish()
        } else {
            self.snapshot()
        }
    }

    fn publish(&self) -> CartSnapshot {
        let snapshot = self.cart.snapshot();
        self.state.send_replace(snapshot.clone());
        snapshot
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
