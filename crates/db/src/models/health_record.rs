//! Pig health record entity model and DTOs.

use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full health record row from the `pig_health_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HealthRecord {
    pub id: DbId,
    pub pig_id: DbId,
    pub symptoms: Option<String>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub treatment_supply_id: DbId,
    pub mortality: bool,
    pub caretaker_id: Option<DbId>,
    pub recorded_at: Timestamp,
}

/// DTO for recording a health event. The caretaker is taken from the
/// authenticated user.
#[derive(Debug, Deserialize)]
pub struct CreateHealthRecord {
    pub pig_id: DbId,
    pub symptoms: Option<String>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub treatment_supply_id: DbId,
    #[serde(default)]
    pub mortality: bool,
}
