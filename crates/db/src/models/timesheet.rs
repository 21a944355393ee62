//! Timesheet row model and request DTO.

use brigade_core::error::CoreError;
use brigade_core::presence::{require_f64, require_i64};
use brigade_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `Timesheet` table. `date` is epoch milliseconds.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Timesheet {
    pub id: DbId,
    pub hours: f64,
    pub rate: f64,
    pub date: i64,
    pub employee_id: DbId,
}

/// DTO for timesheet create/update bodies.
#[derive(Debug, Deserialize)]
pub struct TimesheetInput {
    pub hours: Option<f64>,
    pub rate: Option<f64>,
    pub date: Option<i64>,
}

/// Validated field values for a timesheet insert or update.
#[derive(Debug)]
pub struct TimesheetFields {
    pub hours: f64,
    pub rate: f64,
    pub date: i64,
}

impl TimesheetInput {
    pub fn require_fields(&self) -> Result<TimesheetFields, CoreError> {
        Ok(TimesheetFields {
            hours: require_f64("hours", self.hours)?,
            rate: require_f64("rate", self.rate)?,
            date: require_i64("date", self.date)?,
        })
    }
}
