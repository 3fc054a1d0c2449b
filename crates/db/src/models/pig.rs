//! Pig entity model and DTOs.

use chrono::NaiveDate;
use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full pig row from the `pigs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pig {
    pub id: DbId,
    pub litter_id: Option<DbId>,
    pub sow_identifier: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pig.
#[derive(Debug, Deserialize)]
pub struct CreatePig {
    pub litter_id: Option<DbId>,
    pub sow_identifier: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a pig. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdatePig {
    pub litter_id: Option<DbId>,
    pub sow_identifier: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
