//! Supply entity model and DTOs.

use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full supply row from the `supplies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Supply {
    pub id: DbId,
    pub item_name: String,
    pub category: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a supply item.
#[derive(Debug, Deserialize)]
pub struct CreateSupply {
    pub item_name: String,
    pub category: Option<String>,
    pub quantity: f64,
    pub unit: String,
}

/// DTO for updating a supply item. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateSupply {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}
