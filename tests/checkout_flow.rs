//! Integration tests for the browse → cart → checkout → delivery flow.
//!
//! Wires the catalog aggregator, cart store and order handlers to the
//! in-memory adapters and walks an order from the catalog to completion.

use std::sync::Arc;

use canteen_core::adapters::{InMemoryCatalogSource, InMemoryOrderRepository};
use canteen_core::application::{
    AddOutcome, AdvanceStatusCommand, AdvanceStatusHandler, CartStore, CatalogAggregator,
    CompleteOrderCommand, CompleteOrderHandler, GetOrderHandler, GetOrderQuery,
    ListOrdersHandler, ListOrdersQuery, OrderError, SubmitOrderCommand, SubmitOrderHandler,
};
use canteen_core::domain::catalog::{
    Building, CatalogFilter, MenuItem, OrderableItem, Vendor, VendorMatch,
};
use canteen_core::domain::foundation::{
    BuildingId, ConsumerId, CourierId, ErrorCode, MenuItemId, VendorId,
};
use canteen_core::domain::order::OrderStatus;

// =============================================================================
// Fixtures
// =============================================================================

fn menu_item(id: i64, name: &str, price: &str, vendor: &str) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_string(),
        price: price.to_string(),
        description: None,
        image: None,
        vendor_name: Some(vendor.to_string()),
        category: Some("makanan".to_string()),
        created_at: None,
        updated_at: None,
    }
}

fn vendor(id: i64, name: &str) -> Vendor {
    Vendor {
        id: VendorId::new(id),
        name: name.to_string(),
        phone: None,
        status: Some("open".to_string()),
        created_at: None,
        updated_at: None,
    }
}

fn catalog_source() -> InMemoryCatalogSource {
    InMemoryCatalogSource::with_catalog(
        vec![
            menu_item(1, "Nasi Goreng", "1000.00", "Kantin Bu Sri"),
            menu_item(2, "Es Jeruk", "2000", "Kantin Bu Sri"),
            menu_item(3, "Kopi Susu", "9000.0", "Kedai Kopi"),
        ],
        vec![vendor(10, "Kantin Bu Sri"), vendor(20, "Kedai Kopi")],
        vec![Building {
            id: BuildingId::new(1),
            name: "Gedung A".to_string(),
            address: Some("Jl. Kampus No. 1".to_string()),
            description: None,
        }],
    )
}

async fn loaded_catalog() -> CatalogAggregator {
    let aggregator = CatalogAggregator::new(Arc::new(catalog_source()), VendorMatch::Exact);
    aggregator.load().await;
    aggregator
}

fn find(items: &[OrderableItem], id: i64) -> OrderableItem {
    items
        .iter()
        .find(|item| item.id == MenuItemId::new(id))
        .cloned()
        .unwrap()
}

fn consumer() -> ConsumerId {
    ConsumerId::new("mahasiswa-1").unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn checkout_freezes_cart_into_one_order() {
    let catalog = loaded_catalog().await;
    let items = catalog.items(&CatalogFilter::VendorName("Kantin Bu Sri".to_string()));
    let nasi = find(&items, 1);
    let jeruk = find(&items, 2);

    let mut cart = CartStore::new();
    cart.add_item(&nasi);
    cart.add_item(&nasi);
    cart.add_item(&jeruk);
    assert_eq!(cart.snapshot().total_price, 4000);

    let repo = Arc::new(InMemoryOrderRepository::new());
    let address = catalog.buildings()[0].delivery_label();
    let result = SubmitOrderHandler::new(repo.clone())
        .handle(
            &mut cart,
            SubmitOrderCommand {
                consumer_id: consumer(),
                delivery_address: address,
                proof_image: None,
            },
        )
        .await
        .unwrap();

    assert!(cart.snapshot().is_empty());
    assert_eq!(repo.order_count().await, 1);

    let detail = GetOrderHandler::new(repo.clone())
        .handle(GetOrderQuery {
            order_id: result.order_id,
        })
        .await
        .unwrap();

    assert_eq!(detail.order.total_price, 4000);
    assert_eq!(detail.order.status, OrderStatus::Diterima.as_str());
    assert_eq!(detail.order.delivery_address, "Gedung A, Jl. Kampus No. 1");
    assert_eq!(detail.items.len(), 2);
    assert!(detail
        .items
        .iter()
        .all(|item| item.vendor_id == VendorId::new(10) && item.vendor_name == "Kantin Bu Sri"));
    assert_eq!(detail.receipt.len(), 1);
    assert_eq!(detail.receipt[0].subtotal, 4000);
}

#[tokio::test]
async fn order_items_survive_catalog_changes() {
    let source = Arc::new(catalog_source());
    let catalog = CatalogAggregator::new(source.clone(), VendorMatch::Exact);
    catalog.load().await;
    let nasi = find(&catalog.items(&CatalogFilter::All), 1);

    let mut cart = CartStore::new();
    cart.add_item(&nasi);
    let repo = Arc::new(InMemoryOrderRepository::new());
    let result = SubmitOrderHandler::new(repo.clone())
        .handle(
            &mut cart,
            SubmitOrderCommand {
                consumer_id: consumer(),
                delivery_address: "Gedung A".to_string(),
                proof_image: None,
            },
        )
        .await
        .unwrap();

    source
        .set_menu_items(vec![menu_item(1, "Nasi Goreng", "5000", "Kantin Baru")])
        .await;
    source.set_vendors(vec![vendor(99, "Kantin Baru")]).await;
    catalog.load().await;

    let detail = GetOrderHandler::new(repo)
        .handle(GetOrderQuery {
            order_id: result.order_id,
        })
        .await
        .unwrap();
    assert_eq!(detail.items[0].price, 1000);
    assert_eq!(detail.items[0].vendor_name, "Kantin Bu Sri");
    assert_eq!(detail.order.total_price, 1000);
}

#[tokio::test]
async fn switching_vendor_requires_confirmation() {
    let catalog = loaded_catalog().await;
    let items = catalog.items(&CatalogFilter::All);

    let mut cart = CartStore::new();
    cart.add_item(&find(&items, 1));
    let pending = match cart.add_item(&find(&items, 3)) {
        AddOutcome::NeedsConfirmation(pending) => pending,
        AddOutcome::Added(_) => panic!("cross-vendor add must not merge"),
    };
    assert_eq!(pending.cart_vendor_name, "Kantin Bu Sri");
    assert_eq!(cart.snapshot().lines[0].item_id, MenuItemId::new(1));

    let snapshot = cart.confirm(&pending).unwrap();

    assert_eq!(snapshot.lines.len(), 1);
    assert_eq!(snapshot.lines[0].item_id, MenuItemId::new(3));
    assert_eq!(snapshot.total_price, 9000);
}

#[tokio::test]
async fn courier_and_consumer_drive_the_lifecycle() {
    let catalog = loaded_catalog().await;
    let mut cart = CartStore::new();
    cart.add_item(&find(&catalog.items(&CatalogFilter::All), 3));
    let repo = Arc::new(InMemoryOrderRepository::new());
    let order_id = SubmitOrderHandler::new(repo.clone())
        .handle(
            &mut cart,
            SubmitOrderCommand {
                consumer_id: consumer(),
                delivery_address: "Gedung A".to_string(),
                proof_image: Some("proofs/transfer.jpg".to_string()),
            },
        )
        .await
        .unwrap()
        .order_id;

    let courier = CourierId::new("kurir-1").unwrap();
    let advance = AdvanceStatusHandler::new(repo.clone());
    let lists = ListOrdersHandler::new(repo.clone());

    assert_eq!(lists.handle(ListOrdersQuery::Available).await.unwrap().len(), 1);

    advance
        .handle(AdvanceStatusCommand {
            order_id,
            courier_id: courier.clone(),
            target: OrderStatus::Diproses,
        })
        .await
        .unwrap();

    let err = advance
        .handle(AdvanceStatusCommand {
            order_id,
            courier_id: courier.clone(),
            target: OrderStatus::Selesai,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::IllegalTransition(_)));

    advance
        .handle(AdvanceStatusCommand {
            order_id,
            courier_id: courier.clone(),
            target: OrderStatus::DalamPengantaran,
        })
        .await
        .unwrap();

    assert!(lists.handle(ListOrdersQuery::Available).await.unwrap().is_empty());
    let assigned = lists
        .handle(ListOrdersQuery::ByCourier(courier))
        .await
        .unwrap();
    assert_eq!(assigned[0].status_label, "Dalam Pengantaran");

    let completed = CompleteOrderHandler::new(repo.clone())
        .handle(CompleteOrderCommand {
            order_id,
            consumer_id: consumer(),
        })
        .await
        .unwrap();
    assert_eq!(completed.status, "selesai");

    let history = lists
        .handle(ListOrdersQuery::ByConsumer(consumer()))
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status_label, "Selesai");
}

#[tokio::test]
async fn failed_submission_keeps_the_cart() {
    let catalog = loaded_catalog().await;
    let mut cart = CartStore::new();
    cart.add_item(&find(&catalog.items(&CatalogFilter::All), 2));
    let before = cart.snapshot();

    let repo = Arc::new(InMemoryOrderRepository::new());
    repo.reject_writes(true).await;
    let err = SubmitOrderHandler::new(repo.clone())
        .handle(
            &mut cart,
            SubmitOrderCommand {
                consumer_id: consumer(),
                delivery_address: "Gedung A".to_string(),
                proof_image: None,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::DatabaseError);
    assert_eq!(cart.snapshot(), before);
    assert_eq!(repo.order_count().await, 0);
}
