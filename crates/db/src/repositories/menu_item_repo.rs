//! Repository for the `MenuItem` table.

use brigade_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::menu_item::{MenuItem, MenuItemFields};

/// Column list for MenuItem queries.
const COLUMNS: &str = "id, name, description, inventory, price, menu_id";

/// Provides CRUD operations for menu items.
pub struct MenuItemRepo;

impl MenuItemRepo {
    /// List all items belonging to one menu.
    pub async fn list_for_menu(
        pool: &SqlitePool,
        menu_id: DbId,
    ) -> Result<Vec<MenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM MenuItem WHERE menu_id = ?1");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(menu_id)
            .fetch_all(pool)
            .await
    }

    /// Find a menu item by id alone; ownership is not checked here.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM MenuItem WHERE id = ?1");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether at least one item still references the menu. Drives the
    /// delete guard on menus.
    pub async fn any_for_menu(pool: &SqlitePool, menu_id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM MenuItem WHERE menu_id = ?1 LIMIT 1")
                .bind(menu_id)
                .fetch_optional(pool)
                .await?;

        Ok(found.is_some())
    }

    /// Insert a new item for a menu and return the stored row.
    pub async fn create(
        pool: &SqlitePool,
        menu_id: DbId,
        fields: &MenuItemFields<'_>,
    ) -> Result<MenuItem, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO MenuItem (name, description, inventory, price, menu_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.inventory)
        .bind(fields.price)
        .bind(menu_id)
        .execute(pool)
        .await?;

        Self::fetch(pool, result.last_insert_rowid()).await
    }

    /// Update an item and re-parent it to `menu_id`.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        menu_id: DbId,
        fields: &MenuItemFields<'_>,
    ) -> Result<MenuItem, sqlx::Error> {
        sqlx::query(
            "UPDATE MenuItem SET name = ?1, description = ?2, inventory = ?3, price = ?4,
                 menu_id = ?5
             WHERE id = ?6",
        )
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.inventory)
        .bind(fields.price)
        .bind(menu_id)
        .bind(id)
        .execute(pool)
        .await?;

        Self::fetch(pool, id).await
    }

    /// Hard delete.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM MenuItem WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await
            .map(|_| ())
    }

    async fn fetch(pool: &SqlitePool, id: DbId) -> Result<MenuItem, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM MenuItem WHERE id = ?1");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
