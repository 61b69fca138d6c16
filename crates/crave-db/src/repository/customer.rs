//! # Customer Repository
//!
//! Database operations for customer records.
//!
//! ## The Checkout Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session { user_id: "auth-123" }                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  find_by_user_id("auth-123")                                            │
//! │       │                                                                 │
//! │       ├── Some(customer) → order insert proceeds with customer.id       │
//! │       │                                                                 │
//! │       └── None → submission aborts before any order is written          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crave_core::Customer;

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Finds the customer row for an authenticated user.
    ///
    /// ## Arguments
    /// * `user_id` - Opaque id from the auth provider's session
    ///
    /// ## Returns
    /// `None` when the user has no customer record yet.
    pub async fn find_by_user_id(&self, user_id: &str) -> DbResult<Option<Customer>> {
        debug!(user_id = %user_id, "Looking up customer by user id");

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, user_id, full_name, email, phone, created_at
            FROM customers
            WHERE user_id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Gets a customer by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, user_id, full_name, email, phone, created_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a customer row.
    ///
    /// ## Errors
    /// `DbError::UniqueViolation` when a row for the same `user_id` exists.
    pub async fn insert(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, user_id = %customer.user_id, "Inserting customer");

        sqlx::query(
            r#"
            INSERT INTO customers (id, user_id, full_name, email, phone, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.user_id)
        .bind(&customer.full_name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts all customer rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
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
    use chrono::Utc;
    use uuid::Uuid;

    fn customer(user_id: &str) -> Customer {
        Customer {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("+1 555 010 2345".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_by_user_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let c = customer("auth-123");
        repo.insert(&c).await.unwrap();

        let found = repo.find_by_user_id("auth-123").await.unwrap().unwrap();
        assert_eq!(found.id, c.id);
        assert_eq!(found.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_find_missing_user_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let found = db.customers().find_by_user_id("nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_user_id_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        repo.insert(&customer("auth-123")).await.unwrap();
        let err = repo.insert(&customer("auth-123")).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
