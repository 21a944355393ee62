//! Menu item row model and request DTO.

use brigade_core::error::CoreError;
use brigade_core::presence::{require_f64, require_i64, require_text};
use brigade_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `MenuItem` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MenuItem {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub inventory: i64,
    pub price: f64,
    pub menu_id: DbId,
}

/// DTO for menu item create/update bodies.
#[derive(Debug, Deserialize)]
pub struct MenuItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub inventory: Option<i64>,
    pub price: Option<f64>,
}

/// Validated field values for a menu item insert or update.
#[derive(Debug)]
pub struct MenuItemFields<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub inventory: i64,
    pub price: f64,
}

impl MenuItemInput {
    /// Enforce the required-field rule over all four attributes. An
    /// inventory of 0 is rejected as missing, same as a wage of 0.
    pub fn require_fields(&self) -> Result<MenuItemFields<'_>, CoreError> {
        Ok(MenuItemFields {
            name: require_text("name", self.name.as_deref())?,
            description: require_text("description", self.description.as_deref())?,
            inventory: require_i64("inventory", self.inventory)?,
            price: require_f64("price", self.price)?,
        })
    }
}
