//! # Item Repository
//!
//! Database operations for the `inventory` table.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list()            SELECT ... ORDER BY id                              │
//! │  get_by_id(id)     SELECT ... WHERE id = ?      → Option<Item>         │
//! │  insert(payload)   INSERT ... RETURNING         → Item with new id     │
//! │  update(id, p)     UPDATE ... RETURNING         → Item | NotFound      │
//! │  delete(id)        DELETE ... WHERE id = ?      → () | NotFound        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Update and delete report a missing row in the same statement that would
//! change it, so there is no gap between "check exists" and "write".

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventory_core::{Item, ItemPayload};

/// Repository for inventory item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let created = repo.insert(&payload).await?;
/// let found = repo.get_by_id(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Lists every item, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, quantity, unit_price
            FROM inventory
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, quantity, unit_price
            FROM inventory
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new item; storage assigns the id.
    ///
    /// ## Returns
    /// * `Ok(Item)` - Inserted item with its new id
    /// * `Err(DbError::UniqueViolation)` - A unique constraint rejected the row
    pub async fn insert(&self, payload: &ItemPayload) -> DbResult<Item> {
        debug!(name = %payload.name, "Inserting item");

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO inventory (name, quantity, unit_price)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, quantity, unit_price
            "#,
        )
        .bind(&payload.name)
        .bind(payload.quantity)
        .bind(payload.unit_price)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = item.id, "Item inserted");
        Ok(item)
    }

    /// Replaces all editable fields of an existing item.
    ///
    /// There is no partial merge: every field of `payload` is written.
    /// `updated_at` is set to the current time.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The item as stored after the update
    /// * `Err(DbError::NotFound)` - No item with this id
    pub async fn update(&self, id: i64, payload: &ItemPayload) -> DbResult<Item> {
        debug!(id = %id, "Updating item");

        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE inventory SET
                name = ?2,
                quantity = ?3,
                unit_price = ?4,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING id, name, quantity, unit_price
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(payload.quantity)
        .bind(payload.unit_price)
        .fetch_optional(&self.pool)
        .await?;

        item.ok_or_else(|| DbError::not_found("Item", id))
    }

    /// Deletes an item.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No item with this id (also on a repeat delete)
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting item");

        let result = sqlx::query("DELETE FROM inventory WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Counts stored items (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
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
    use crate::{Database, DbConfig};

    async fn repo() -> (Database, ItemRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.items();
        (db, repo)
    }

    fn payload(name: &str, quantity: i32, unit_price: f64) -> ItemPayload {
        ItemPayload {
            name: name.to_string(),
            quantity,
            unit_price,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let (_db, repo) = repo().await;

        let created = repo.insert(&payload("Widget", 5, 2.5)).await.unwrap();
        assert!(created.id > 0);

        let found = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.name, "Widget");
        assert_eq!(found.quantity, 5);
        assert_eq!(found.unit_price, 2.5);
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let (_db, repo) = repo().await;

        let a = repo.insert(&payload("A", 1, 1.0)).await.unwrap();
        let b = repo.insert(&payload("A", 1, 1.0)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let (_db, repo) = repo().await;
        assert!(repo.get_by_id(999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_all_in_id_order() {
        let (_db, repo) = repo().await;
        assert!(repo.list().await.unwrap().is_empty());

        let a = repo.insert(&payload("A", 1, 1.0)).await.unwrap();
        let b = repo.insert(&payload("B", 2, 2.0)).await.unwrap();

        let items = repo.list().await.unwrap();
        assert_eq!(items, vec![a, b]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let (_db, repo) = repo().await;
        let created = repo.insert(&payload("Old", 1, 1.0)).await.unwrap();

        let updated = repo
            .update(created.id, &payload("New", 9, 9.75))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let found = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "New");
        assert_eq!(found.quantity, 9);
        assert_eq!(found.unit_price, 9.75);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_db, repo) = repo().await;

        let result = repo.update(42, &payload("Ghost", 1, 1.0)).await;
        assert!(matches!(result, Err(DbError::NotFound { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found_second_time() {
        let (_db, repo) = repo().await;
        let created = repo.insert(&payload("Temp", 1, 1.0)).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());

        let again = repo.delete(created.id).await;
        assert!(matches!(again, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_unique_violation_is_classified() {
        let (db, repo) = repo().await;
        sqlx::query("CREATE UNIQUE INDEX idx_inventory_name ON inventory(name)")
            .execute(db.pool())
            .await
            .unwrap();

        repo.insert(&payload("Widget", 1, 1.0)).await.unwrap();
        let err = repo.insert(&payload("Widget", 2, 2.0)).await.unwrap_err();

        assert!(err.is_unique_violation(), "unexpected error: {err}");
    }
}
