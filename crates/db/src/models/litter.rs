//! Litter entity model and DTOs.

use chrono::NaiveDate;
use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full litter row from the `litters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Litter {
    pub id: DbId,
    pub litter_size: Option<i32>,
    pub birth_date: NaiveDate,
    pub sow_identifier: Option<String>,
    pub caretaker_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new litter.
#[derive(Debug, Deserialize)]
pub struct CreateLitter {
    pub litter_size: Option<i32>,
    pub birth_date: NaiveDate,
    pub sow_identifier: Option<String>,
    pub caretaker_id: Option<DbId>,
}

/// DTO for updating a litter. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateLitter {
    pub litter_size: Option<i32>,
    pub birth_date: Option<NaiveDate>,
    pub sow_identifier: Option<String>,
    pub caretaker_id: Option<DbId>,
}
