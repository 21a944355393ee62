//! Employee row model and request DTO.

use brigade_core::error::CoreError;
use brigade_core::presence::{require_f64, require_text};
use brigade_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `Employee` table.
///
/// `is_current_employee` is the soft-delete flag: 1 for active staff,
/// 0 for former staff. Former employees stay fetchable by id but are
/// excluded from listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub wage: f64,
    pub is_current_employee: i64,
}

/// DTO for employee create/update bodies.
///
/// All fields are optional on the wire; [`EmployeeInput::require_fields`]
/// enforces presence. `isCurrentEmployee` is only honoured on create and
/// is ignored by update.
#[derive(Debug, Deserialize)]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub position: Option<String>,
    pub wage: Option<f64>,
    #[serde(rename = "isCurrentEmployee")]
    pub is_current_employee: Option<i64>,
}

/// Validated field values for an employee insert or update.
#[derive(Debug)]
pub struct EmployeeFields<'a> {
    pub name: &'a str,
    pub position: &'a str,
    pub wage: f64,
}

impl EmployeeInput {
    /// Enforce the required-field rule over name, position, and wage.
    pub fn require_fields(&self) -> Result<EmployeeFields<'_>, CoreError> {
        Ok(EmployeeFields {
            name: require_text("name", self.name.as_deref())?,
            position: require_text("position", self.position.as_deref())?,
            wage: require_f64("wage", self.wage)?,
        })
    }

    /// The stored flag for a create: 0 only when the body says exactly 0,
    /// otherwise 1.
    pub fn current_flag(&self) -> i64 {
        if self.is_current_employee == Some(0) {
            0
        } else {
            1
        }
    }
}
