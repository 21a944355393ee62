//! Repository for the `Employee` table.
//!
//! Writes follow an insert-then-refetch shape: execute the statement, then
//! select the affected row by id so the response carries exactly what the
//! store holds (including column defaults). The two statements are not
//! atomic; a refetch failure surfaces as a storage error with the write
//! left intact.

use brigade_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::employee::{Employee, EmployeeFields};

/// Column list for Employee queries.
const COLUMNS: &str = "id, name, position, wage, is_current_employee";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// List active employees. Former staff (flag 0) are excluded.
    pub async fn list_current(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Employee WHERE is_current_employee = 1");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Find an employee by id, current or former.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Employee WHERE id = ?1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new employee and return the stored row.
    pub async fn create(
        pool: &SqlitePool,
        fields: &EmployeeFields<'_>,
        is_current_employee: i64,
    ) -> Result<Employee, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO Employee (name, position, wage, is_current_employee)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(fields.name)
        .bind(fields.position)
        .bind(fields.wage)
        .bind(is_current_employee)
        .execute(pool)
        .await?;

        Self::fetch(pool, result.last_insert_rowid()).await
    }

    /// Update name, position, and wage in place and return the stored row.
    /// The soft-delete flag is not touched here.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        fields: &EmployeeFields<'_>,
    ) -> Result<Employee, sqlx::Error> {
        sqlx::query("UPDATE Employee SET name = ?1, position = ?2, wage = ?3 WHERE id = ?4")
            .bind(fields.name)
            .bind(fields.position)
            .bind(fields.wage)
            .bind(id)
            .execute(pool)
            .await?;

        Self::fetch(pool, id).await
    }

    /// Soft delete: clear the flag and return the flagged row. The row and
    /// its timesheets survive.
    pub async fn mark_former(pool: &SqlitePool, id: DbId) -> Result<Employee, sqlx::Error> {
        sqlx::query("UPDATE Employee SET is_current_employee = 0 WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Self::fetch(pool, id).await
    }

    async fn fetch(pool: &SqlitePool, id: DbId) -> Result<Employee, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Employee WHERE id = ?1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
