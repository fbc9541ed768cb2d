//! PostgreSQL implementation of OrderRepository.
//!
//! Orders live in `orders`, their frozen lines in `order_items`. Items are
//! deleted with their order through `ON DELETE CASCADE`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    ConsumerId, CourierId, DomainError, ErrorCode, MenuItemId, OrderId, Timestamp, VendorId,
};
use crate::domain::order::{Order, OrderDraft, OrderItem, OrderRevision, StoredStatus};
use crate::ports::OrderRepository;

const ORDER_COLUMNS: &str = "id, consumer_id, total_price, status, created_at, \
                             delivery_address, proof_image, courier_id";

/// PostgreSQL implementation of OrderRepository.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgresOrderRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_orders(
        &self,
        filter: &str,
        bind: Option<&str>,
    ) -> Result<Vec<Order>, DomainError> {
        let sql = format!(
            "SELECT {} FROM orders {} ORDER BY created_at DESC, id DESC",
            ORDER_COLUMNS, filter
        );
        let mut query = sqlx::query(&sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list orders"))?;

        rows.into_iter().map(row_to_order).collect()
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn insert(&self, draft: &OrderDraft) -> Result<OrderId, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to start transaction"))?;

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO orders (
                consumer_id, total_price, status, created_at, delivery_address, proof_image
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(draft.consumer_id.as_str())
        .bind(draft.total_price)
        .bind(draft.status.as_str())
        .bind(draft.created_at.as_datetime())
        .bind(&draft.delivery_address)
        .bind(draft.proof_image.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to insert order"))?;

        for item in &draft.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    order_id, item_id, name, vendor_id, vendor_name, price, quantity, note
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(id)
            .bind(item.item_id.value())
            .bind(&item.name)
            .bind(item.vendor_id.value())
            .bind(&item.vendor_name)
            .bind(item.price)
            .bind(i32::try_from(item.quantity).map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidFormat,
                    format!("Quantity out of range: {}", item.quantity),
                )
            })?)
            .bind(item.note.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert order item"))?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;

        Ok(OrderId::new(id))
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, DomainError> {
        let sql = format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch order"))?;

        row.map(row_to_order).transpose()
    }

    async fn find_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT order_id, item_id, name, vendor_id, vendor_name, price, quantity, note
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch order items"))?;

        rows.into_iter().map(row_to_item).collect()
    }

    async fn update(&self, order: &Order, expected: &OrderRevision) -> Result<(), DomainError> {
        // Blank courier columns read as unassigned, so compare them as NULL.
        let result = sqlx::query(
            r#"
            UPDATE orders SET
                status = $2,
                courier_id = $3
            WHERE id = $1
              AND status = $4
              AND (CASE WHEN btrim(courier_id) = '' THEN NULL ELSE courier_id END)
                  IS NOT DISTINCT FROM $5
            "#,
        )
        .bind(order.id().value())
        .bind(order.status().as_str())
        .bind(order.courier_id().map(CourierId::as_str))
        .bind(expected.status.as_str())
        .bind(expected.courier_id.as_ref().map(CourierId::as_str))
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update order"))?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1)")
            .bind(order.id().value())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check order"))?;

        if exists {
            tracing::warn!(order_id = %order.id(), "Order changed since it was loaded");
            Err(DomainError::conflict(format!(
                "Order {} changed since it was loaded",
                order.id()
            )))
        } else {
            Err(DomainError::new(
                ErrorCode::OrderNotFound,
                format!("Order not found: {}", order.id()),
            ))
        }
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        self.fetch_orders("", None).await
    }

    async fn list_by_courier(&self, courier_id: &CourierId) -> Result<Vec<Order>, DomainError> {
        self.fetch_orders("WHERE courier_id = $1", Some(courier_id.as_str()))
            .await
    }

    async fn list_by_consumer(&self, consumer_id: &ConsumerId) -> Result<Vec<Order>, DomainError> {
        self.fetch_orders("WHERE consumer_id = $1", Some(consumer_id.as_str()))
            .await
    }

    async fn reset(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM orders")
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to reset orders"))?;

        Ok(result.rows_affected())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

fn row_to_order(row: PgRow) -> Result<Order, DomainError> {
    let consumer_id: String = column(&row, "consumer_id")?;
    let courier_id: Option<String> = column(&row, "courier_id")?;
    let status: String = column(&row, "status")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    let consumer_id = ConsumerId::new(consumer_id).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid consumer_id: {}", e),
        )
    })?;
    // A blank courier column means nobody has claimed the order.
    let courier_id = courier_id.and_then(|raw| CourierId::new(raw).ok());

    Ok(Order::reconstitute(
        OrderId::new(column(&row, "id")?),
        consumer_id,
        column(&row, "total_price")?,
        StoredStatus::parse(&status),
        Timestamp::from_datetime(created_at),
        column(&row, "delivery_address")?,
        column(&row, "proof_image")?,
        courier_id,
    ))
}

fn row_to_item(row: PgRow) -> Result<OrderItem, DomainError> {
    let quantity: i32 = column(&row, "quantity")?;

    Ok(OrderItem {
        order_id: OrderId::new(column(&row, "order_id")?),
        item_id: MenuItemId::new(column(&row, "item_id")?),
        name: column(&row, "name")?,
        vendor_id: VendorId::new(column(&row, "vendor_id")?),
        vendor_name: column(&row, "vendor_name")?,
        price: column(&row, "price")?,
        quantity: u32::try_from(quantity).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid quantity: {}", quantity),
            )
        })?,
        note: column(&row, "note")?,
    })
}
