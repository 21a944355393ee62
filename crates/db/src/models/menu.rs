//! Menu row model and request DTO.

use brigade_core::error::CoreError;
use brigade_core::presence::require_text;
use brigade_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `Menu` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Menu {
    pub id: DbId,
    pub title: String,
}

/// DTO for menu create/update bodies.
#[derive(Debug, Deserialize)]
pub struct MenuInput {
    pub title: Option<String>,
}

impl MenuInput {
    pub fn require_title(&self) -> Result<&str, CoreError> {
        require_text("title", self.title.as_deref())
    }
}
