//! Repository for the `Timesheet` table.

use brigade_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::timesheet::{Timesheet, TimesheetFields};

/// Column list for Timesheet queries.
const COLUMNS: &str = "id, hours, rate, date, employee_id";

/// Provides CRUD operations for timesheets.
pub struct TimesheetRepo;

impl TimesheetRepo {
    /// List all timesheets belonging to one employee.
    pub async fn list_for_employee(
        pool: &SqlitePool,
        employee_id: DbId,
    ) -> Result<Vec<Timesheet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Timesheet WHERE employee_id = ?1");
        sqlx::query_as::<_, Timesheet>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Find a timesheet by id alone; ownership is not checked here.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Timesheet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Timesheet WHERE id = ?1");
        sqlx::query_as::<_, Timesheet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new timesheet for an employee and return the stored row.
    pub async fn create(
        pool: &SqlitePool,
        employee_id: DbId,
        fields: &TimesheetFields,
    ) -> Result<Timesheet, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO Timesheet (hours, rate, date, employee_id) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(fields.hours)
        .bind(fields.rate)
        .bind(fields.date)
        .bind(employee_id)
        .execute(pool)
        .await?;

        Self::fetch(pool, result.last_insert_rowid()).await
    }

    /// Update a timesheet and re-parent it to `employee_id`. Updating via a
    /// different employee's path moves the timesheet to that employee.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        employee_id: DbId,
        fields: &TimesheetFields,
    ) -> Result<Timesheet, sqlx::Error> {
        sqlx::query(
            "UPDATE Timesheet SET hours = ?1, rate = ?2, date = ?3, employee_id = ?4 WHERE id = ?5",
        )
        .bind(fields.hours)
        .bind(fields.rate)
        .bind(fields.date)
        .bind(employee_id)
        .bind(id)
        .execute(pool)
        .await?;

        Self::fetch(pool, id).await
    }

    /// Hard delete.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM Timesheet WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await
            .map(|_| ())
    }

    async fn fetch(pool: &SqlitePool, id: DbId) -> Result<Timesheet, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Timesheet WHERE id = ?1");
        sqlx::query_as::<_, Timesheet>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
