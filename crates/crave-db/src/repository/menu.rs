//! # Menu Item Repository
//!
//! Database operations for the menu catalog. The cart freezes a copy of
//! the name and price when an item is added; these queries are what the
//! menu pages read.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crave_core::MenuItem;

/// Repository for menu item database operations.
#[derive(Debug, Clone)]
pub struct MenuItemRepository {
    pool: SqlitePool,
}

impl MenuItemRepository {
    /// Creates a new MenuItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuItemRepository { pool }
    }

    /// Gets a menu item by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, description, price_cents, category,
                   is_available, created_at, updated_at
            FROM menu_items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists available menu items, ordered by category then name.
    pub async fn list_available(&self, limit: u32) -> DbResult<Vec<MenuItem>> {
        debug!(limit = %limit, "Listing available menu items");

        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, description, price_cents, category,
                   is_available, created_at, updated_at
            FROM menu_items
            WHERE is_available = 1
            ORDER BY category, name
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Inserts a menu item.
    pub async fn insert(&self, item: &MenuItem) -> DbResult<()> {
        debug!(id = %item.id, name = %item.name, "Inserting menu item");

        sqlx::query(
            r#"
            INSERT INTO menu_items (
                id, name, description, price_cents, category,
                is_available, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price_cents)
        .bind(&item.category)
        .bind(item.is_available)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts all menu items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
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
    use chrono::Utc;
    use uuid::Uuid;

    fn menu_item(name: &str, price_cents: i64, available: bool) -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: None,
            price_cents,
            category: Some("mains".to_string()),
            is_available: available,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.menu();

        let item = menu_item("Margherita Pizza", 1099, true);
        repo.insert(&item).await.unwrap();

        let found = repo.get_by_id(&item.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Margherita Pizza");
        assert_eq!(found.price_cents, 1099);
        assert!(found.is_available);
    }

    #[tokio::test]
    async fn test_list_available_filters_unavailable() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.menu();

        repo.insert(&menu_item("Pizza", 1099, true)).await.unwrap();
        repo.insert(&menu_item("Soup of Yesterday", 499, false))
            .await
            .unwrap();

        let items = repo.list_available(50).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Pizza");
    }
}
