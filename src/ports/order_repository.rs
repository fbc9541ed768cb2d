//! Order repository port.
//!
//! Defines the contract for persisting orders and their items and for the
//! read projections the consumer and courier views are built from.
//!
//! # Design
//!
//! - **Atomic insert**: header and items are written together or not at all
//! - **Append-only**: items are never updated; orders only change status and
//!   courier through [`OrderRepository::update`]
//! - **Conditional writes**: an update applies only while the stored order
//!   still matches the revision the change was computed from
//! - **One schema, several views**: consumer and courier listings are
//!   queries over the same rows

use async_trait::async_trait;

use crate::domain::foundation::{ConsumerId, CourierId, DomainError, OrderId};
use crate::domain::order::{Order, OrderDraft, OrderItem, OrderRevision};

/// Repository port for Order persistence.
///
/// Implementations must ensure a reader never observes an order header
/// without its items.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order header and all of its items as one unit.
    ///
    /// Returns the id assigned by the store.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure; nothing is written
    async fn insert(&self, draft: &OrderDraft) -> Result<OrderId, DomainError>;

    /// Find an order by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, DomainError>;

    /// Items of an order, in submission order.
    async fn find_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, DomainError>;

    /// Persist status and courier changes of an existing order.
    ///
    /// `expected` is the revision the order had when it was loaded; the
    /// write is skipped if the stored order has moved on since.
    ///
    /// # Errors
    ///
    /// - `OrderNotFound` if the order doesn't exist
    /// - `ConcurrencyConflict` if the stored status or courier differ from `expected`
    /// - `DatabaseError` on persistence failure
    async fn update(&self, order: &Order, expected: &OrderRevision) -> Result<(), DomainError>;

    /// All orders, newest first.
    async fn list_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Orders assigned to a courier, newest first.
    async fn list_by_courier(&self, courier_id: &CourierId) -> Result<Vec<Order>, DomainError>;

    /// Orders placed by a consumer, newest first.
    async fn list_by_consumer(&self, consumer_id: &ConsumerId) -> Result<Vec<Order>, DomainError>;

    /// Delete every order and item. Development use only.
    async fn reset(&self) -> Result<u64, DomainError>;
}
