//! In-memory order repository.
//!
//! Keeps orders and their items behind a single lock so a header and its
//! items become visible together. Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ConsumerId, CourierId, DomainError, ErrorCode, OrderId};
use crate::domain::order::{Order, OrderDraft, OrderItem, OrderRevision};
use crate::ports::OrderRepository;

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    orders: BTreeMap<OrderId, Order>,
    items: Vec<OrderItem>,
    reject_writes: bool,
}

impl Store {
    fn ensure_writable(&self) -> Result<(), DomainError> {
        if self.reject_writes {
            return Err(DomainError::database("Order store is rejecting writes"));
        }
        Ok(())
    }
}

fn newest_first<'a>(orders: impl Iterator<Item = &'a Order>) -> Vec<Order> {
    let mut orders: Vec<Order> = orders.cloned().collect();
    orders.sort_by(|a, b| {
        b.created_at()
            .cmp(a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
    orders
}

/// In-memory implementation of OrderRepository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryOrderRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail with a `DatabaseError`.
    pub async fn reject_writes(&self, reject: bool) {
        self.store.write().await.reject_writes = reject;
    }

    /// Number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.store.read().await.orders.len()
    }

    /// Number of stored order items across all orders.
    pub async fn item_count(&self) -> usize {
        self.store.read().await.items.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, draft: &OrderDraft) -> Result<OrderId, DomainError> {
        let mut store = self.store.write().await;
        store.ensure_writable()?;

        store.last_id += 1;
        let id = OrderId::new(store.last_id);
        let (order, items) = draft.clone().into_order(id);
        store.orders.insert(id, order);
        store.items.extend(items);
        Ok(id)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.store.read().await.orders.get(&id).cloned())
    }

    async fn find_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .items
            .iter()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn update(&self, order: &Order, expected: &OrderRevision) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        store.ensure_writable()?;

        match store.orders.get_mut(&order.id()) {
            Some(existing) if !existing.matches(expected) => Err(DomainError::conflict(format!(
                "Order {} changed since it was loaded",
                order.id()
            ))),
            Some(existing) => {
                *existing = order.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::OrderNotFound,
                format!("Order not found: {}", order.id()),
            )),
        }
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let store = self.store.read().await;
        Ok(newest_first(store.orders.values()))
    }

    async fn list_by_courier(&self, courier_id: &CourierId) -> Result<Vec<Order>, DomainError> {
        let store = self.store.read().await;
        Ok(newest_first(
            store
                .orders
                .values()
                .filter(|order| order.courier_id() == Some(courier_id)),
        ))
    }

    async fn list_by_consumer(&self, consumer_id: &ConsumerId) -> Result<Vec<Order>, DomainError> {
        let store = self.store.read().await;
        Ok(newest_first(
            store
                .orders
                .values()
                .filter(|order| order.consumer_id() == consumer_id),
        ))
    }

    async fn reset(&self) -> Result<u64, DomainError> {
        let mut store = self.store.write().await;
        store.ensure_writable()?;

        let removed = store.orders.len() as u64;
        store.orders.clear();
        store.items.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartLine;
    use crate::domain::foundation::{MenuItemId, VendorId};
    use crate::domain::order::OrderStatus;

    fn draft(consumer: &str) -> OrderDraft {
        let lines = vec![
            CartLine {
                item_id: MenuItemId::new(1),
                name: "Nasi Goreng".to_string(),
                unit_price: 1000,
                quantity: 2,
                vendor_id: VendorId::new(7),
                vendor_name: "Kantin Bu Sri".to_string(),
                note: None,
            },
            CartLine {
                item_id: MenuItemId::new(2),
                name: "Es Teh".to_string(),
                unit_price: 2000,
                quantity: 1,
                vendor_id: VendorId::new(7),
                vendor_name: "Kantin Bu Sri".to_string(),
                note: Some("less sugar".to_string()),
            },
        ];
        OrderDraft::assemble(&lines, ConsumerId::new(consumer).unwrap(), "Gedung A", None).unwrap()
    }

    #[tokio::test]
    async fn insert_stores_header_and_items_together() {
        let repo = InMemoryOrderRepository::new();

        let id = repo.insert(&draft("mahasiswa-1")).await.unwrap();

        let order = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(order.total_price(), 4000);
        assert_eq!(order.lifecycle_status(), Ok(OrderStatus::Diterima));
        let items = repo.find_items(id).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.order_id == id));
    }

    #[tokio::test]
    async fn rejected_insert_writes_nothing() {
        let repo = InMemoryOrderRepository::new();
        repo.reject_writes(true).await;

        let err = repo.insert(&draft("mahasiswa-1")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(repo.order_count().await, 0);
        assert_eq!(repo.item_count().await, 0);
    }

    #[tokio::test]
    async fn update_of_missing_order_fails() {
        let repo = InMemoryOrderRepository::new();
        let id = repo.insert(&draft("mahasiswa-1")).await.unwrap();
        let order = repo.find_by_id(id).await.unwrap().unwrap();
        repo.reset().await.unwrap();

        let err = repo.update(&order, &order.revision()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[tokio::test]
    async fn stale_update_cannot_reopen_completed_order() {
        let repo = InMemoryOrderRepository::new();
        let id = repo.insert(&draft("mahasiswa-1")).await.unwrap();
        let mut by_consumer = repo.find_by_id(id).await.unwrap().unwrap();
        let mut by_courier = repo.find_by_id(id).await.unwrap().unwrap();
        let consumer_loaded = by_consumer.revision();
        let courier_loaded = by_courier.revision();

        by_consumer
            .complete(&ConsumerId::new("mahasiswa-1").unwrap())
            .unwrap();
        repo.update(&by_consumer, &consumer_loaded).await.unwrap();

        by_courier
            .advance(&CourierId::new("kurir-1").unwrap(), OrderStatus::Dibatalkan)
            .unwrap();
        let err = repo.update(&by_courier, &courier_loaded).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.lifecycle_status(), Ok(OrderStatus::Selesai));
        assert_eq!(stored.courier_id(), None);
    }

    #[tokio::test]
    async fn second_claim_from_stale_copy_is_rejected() {
        let repo = InMemoryOrderRepository::new();
        let id = repo.insert(&draft("mahasiswa-1")).await.unwrap();
        let mut first = repo.find_by_id(id).await.unwrap().unwrap();
        let mut second = repo.find_by_id(id).await.unwrap().unwrap();
        let loaded = first.revision();

        first.assign_courier(&CourierId::new("kurir-1").unwrap()).unwrap();
        repo.update(&first, &loaded).await.unwrap();
        second.assign_courier(&CourierId::new("kurir-2").unwrap()).unwrap();
        let err = repo.update(&second, &loaded).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.courier_id(), Some(&CourierId::new("kurir-1").unwrap()));
    }

    #[tokio::test]
    async fn listings_are_newest_first_and_scoped() {
        let repo = InMemoryOrderRepository::new();
        let first = repo.insert(&draft("mahasiswa-1")).await.unwrap();
        let second = repo.insert(&draft("mahasiswa-2")).await.unwrap();
        let third = repo.insert(&draft("mahasiswa-1")).await.unwrap();

        let all: Vec<OrderId> = repo.list_all().await.unwrap().iter().map(Order::id).collect();
        assert_eq!(all, vec![third, second, first]);

        let mine: Vec<OrderId> = repo
            .list_by_consumer(&ConsumerId::new("mahasiswa-1").unwrap())
            .await
            .unwrap()
            .iter()
            .map(Order::id)
            .collect();
        assert_eq!(mine, vec![third, first]);
    }

    #[tokio::test]
    async fn courier_listing_follows_assignment() {
        let repo = InMemoryOrderRepository::new();
        let id = repo.insert(&draft("mahasiswa-1")).await.unwrap();
        let courier = CourierId::new("kurir-1").unwrap();
        assert!(repo.list_by_courier(&courier).await.unwrap().is_empty());

        let mut order = repo.find_by_id(id).await.unwrap().unwrap();
        let loaded = order.revision();
        order.assign_courier(&courier).unwrap();
        repo.update(&order, &loaded).await.unwrap();

        assert_eq!(repo.list_by_courier(&courier).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reset_removes_orders_and_items() {
        let repo = InMemoryOrderRepository::new();
        repo.insert(&draft("mahasiswa-1")).await.unwrap();
        repo.insert(&draft("mahasiswa-2")).await.unwrap();

        assert_eq!(repo.reset().await.unwrap(), 2);
        assert_eq!(repo.order_count().await, 0);
        assert_eq!(repo.item_count().await, 0);
    }
}
