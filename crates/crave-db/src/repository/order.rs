//! # Order Repository
//!
//! Database operations for orders and order items.
//!
//! ## Submission Write Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Order Write Sequence                                   │
//! │                                                                         │
//! │  1. create(NewOrder)                                                   │
//! │     └── INSERT INTO orders ... status 'pending'                        │
//! │     └── returns the persisted Order (id generated here)                │
//! │                                                                         │
//! │  2. add_items(order_id, lines)                                         │
//! │     └── single multi-row INSERT INTO order_items                       │
//! │                                                                         │
//! │  The two writes are NOT wrapped in a transaction. A failure in         │
//! │  step 2 leaves a pending order with no items; the caller surfaces      │
//! │  the error and the user retries. See DESIGN.md for the atomicity       │
//! │  decision.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{QueryBuilder, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use crave_core::{Order, OrderItem, OrderStatus};

/// Input for creating an order row.
///
/// Totals are the cart-derived snapshot; the repository fills in the id,
/// status and timestamps.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: String,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub notes: Option<String>,
}

/// One line of the order item batch insert.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub menu_item_id: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts an order row and returns the persisted order.
    ///
    /// The id is generated by this layer at insert time and handed back to
    /// the caller; the order items insert depends on it.
    ///
    /// ## Arguments
    /// * `new` - Customer reference, cart-derived totals, optional notes
    pub async fn create(&self, new: NewOrder) -> DbResult<Order> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        debug!(id = %id, customer_id = %new.customer_id, total = %new.total_cents, "Creating order");

        let order = Order {
            id,
            customer_id: new.customer_id,
            subtotal_cents: new.subtotal_cents,
            tax_cents: new.tax_cents,
            total_cents: new.total_cents,
            status: OrderStatus::Pending,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, customer_id, subtotal_cents, tax_cents, total_cents,
                status, notes, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&order.id)
        .bind(&order.customer_id)
        .bind(order.subtotal_cents)
        .bind(order.tax_cents)
        .bind(order.total_cents)
        .bind(order.status)
        .bind(&order.notes)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(order)
    }

    /// Inserts the order's line items as a single multi-row INSERT.
    ///
    /// ## Arguments
    /// * `order_id` - Id returned by [`create`](Self::create)
    /// * `lines` - One entry per cart line, prices frozen at add-to-cart time
    ///
    /// ## Errors
    /// `DbError::ForeignKeyViolation` when `order_id` or any `menu_item_id`
    /// does not reference an existing row.
    pub async fn add_items(&self, order_id: &str, lines: &[NewOrderItem]) -> DbResult<()> {
        if lines.is_empty() {
            return Ok(());
        }

        debug!(order_id = %order_id, count = lines.len(), "Inserting order items");

        let now = Utc::now();

        let mut builder: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(
            "INSERT INTO order_items (id, order_id, menu_item_id, quantity, unit_price_cents, created_at) ",
        );

        builder.push_values(lines, |mut row, line| {
            row.push_bind(Uuid::new_v4().to_string())
                .push_bind(order_id)
                .push_bind(&line.menu_item_id)
                .push_bind(line.quantity)
                .push_bind(line.unit_price_cents)
                .push_bind(now);
        });

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, subtotal_cents, tax_cents, total_cents,
                   status, notes, created_at, updated_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Gets all items for an order.
    pub async fn get_items(&self, order_id: &str) -> DbResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, menu_item_id, quantity, unit_price_cents, created_at
            FROM order_items
            WHERE order_id = ?1
            ORDER BY created_at
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Counts orders placed by a customer.
    pub async fn count_for_customer(&self, customer_id: &str) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE customer_id = ?1")
                .bind(customer_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Counts all order rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts all order item rows.
    pub async fn count_items(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::DbError;
    use crave_core::{Customer, MenuItem};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_customer(db: &Database) -> Customer {
        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            user_id: "auth-123".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            created_at: Utc::now(),
        };
        db.customers().insert(&customer).await.unwrap();
        customer
    }

    async fn seed_menu_item(db: &Database, name: &str, price_cents: i64) -> MenuItem {
        let now = Utc::now();
        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: None,
            price_cents,
            category: Some("mains".to_string()),
            is_available: true,
            created_at: now,
            updated_at: now,
        };
        db.menu().insert(&item).await.unwrap();
        item
    }

    fn new_order(customer_id: &str) -> NewOrder {
        NewOrder {
            customer_id: customer_id.to_string(),
            subtotal_cents: 2500,
            tax_cents: 250,
            total_cents: 2750,
            notes: Some("No onions".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_order_is_pending_with_generated_id() {
        let db = test_db().await;
        let customer = seed_customer(&db).await;

        let order = db.orders().create(new_order(&customer.id)).await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.id.is_empty());

        let fetched = db.orders().get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(fetched.total_cents, 2750);
        assert_eq!(fetched.status, OrderStatus::Pending);
        assert_eq!(fetched.notes.as_deref(), Some("No onions"));
    }

    #[tokio::test]
    async fn test_add_items_batch() {
        let db = test_db().await;
        let customer = seed_customer(&db).await;
        let pizza = seed_menu_item(&db, "Pizza", 1000).await;
        let soup = seed_menu_item(&db, "Soup", 500).await;

        let order = db.orders().create(new_order(&customer.id)).await.unwrap();

        let lines = vec![
            NewOrderItem {
                menu_item_id: pizza.id.clone(),
                quantity: 2,
                unit_price_cents: 1000,
            },
            NewOrderItem {
                menu_item_id: soup.id.clone(),
                quantity: 1,
                unit_price_cents: 500,
            },
        ];
        db.orders().add_items(&order.id, &lines).await.unwrap();

        let items = db.orders().get_items(&order.id).await.unwrap();
        assert_eq!(items.len(), 2);
        let line_sum: i64 = items.iter().map(|i| i.line_total().cents()).sum();
        assert_eq!(line_sum, order.subtotal_cents);
    }

    #[tokio::test]
    async fn test_order_requires_existing_customer() {
        let db = test_db().await;
        let err = db.orders().create(new_order("ghost")).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    /// The item batch is not transactional with the order insert: a batch
    /// that violates a foreign key leaves the already-written pending order
    /// behind with zero items.
    #[tokio::test]
    async fn test_failed_item_batch_leaves_orphaned_order() {
        let db = test_db().await;
        let customer = seed_customer(&db).await;

        let order = db.orders().create(new_order(&customer.id)).await.unwrap();

        let bad_lines = vec![NewOrderItem {
            menu_item_id: "no-such-item".to_string(),
            quantity: 1,
            unit_price_cents: 1000,
        }];
        let err = db.orders().add_items(&order.id, &bad_lines).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        // Order row survives, orphaned
        assert_eq!(db.orders().count().await.unwrap(), 1);
        assert_eq!(db.orders().count_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_items_empty_is_noop() {
        let db = test_db().await;
        let customer = seed_customer(&db).await;
        let order = db.orders().create(new_order(&customer.id)).await.unwrap();

        db.orders().add_items(&order.id, &[]).await.unwrap();
        assert_eq!(db.orders().count_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_count_for_customer() {
        let db = test_db().await;
        let customer = seed_customer(&db).await;

        db.orders().create(new_order(&customer.id)).await.unwrap();
        db.orders().create(new_order(&customer.id)).await.unwrap();

        let count = db.orders().count_for_customer(&customer.id).await.unwrap();
        assert_eq!(count, 2);
    }
}
