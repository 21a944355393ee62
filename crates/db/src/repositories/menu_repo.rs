//! Repository for the `Menu` table.
//!
//! Menu deletion is guarded in the handler layer: a menu that still owns
//! items may not be removed. [`MenuRepo::delete`] itself is unconditional.

use brigade_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::menu::Menu;

/// Column list for Menu queries.
const COLUMNS: &str = "id, title";

/// Provides CRUD operations for menus.
pub struct MenuRepo;

impl MenuRepo {
    /// List all menus.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Menu>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Menu");
        sqlx::query_as::<_, Menu>(&query).fetch_all(pool).await
    }

    /// Find a menu by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Menu>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Menu WHERE id = ?1");
        sqlx::query_as::<_, Menu>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new menu and return the stored row.
    pub async fn create(pool: &SqlitePool, title: &str) -> Result<Menu, sqlx::Error> {
        let result = sqlx::query("INSERT INTO Menu (title) VALUES (?1)")
            .bind(title)
            .execute(pool)
            .await?;

        Self::fetch(pool, result.last_insert_rowid()).await
    }

    /// Update a menu's title and return the stored row.
    pub async fn update(pool: &SqlitePool, id: DbId, title: &str) -> Result<Menu, sqlx::Error> {
        sqlx::query("UPDATE Menu SET title = ?1 WHERE id = ?2")
            .bind(title)
            .bind(id)
            .execute(pool)
            .await?;

        Self::fetch(pool, id).await
    }

    /// Hard delete. Callers must check for owned items first.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM Menu WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await
            .map(|_| ())
    }

    async fn fetch(pool: &SqlitePool, id: DbId) -> Result<Menu, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Menu WHERE id = ?1");
        sqlx::query_as::<_, Menu>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
