//! Feeding log entity model and DTOs.

use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full feeding log row from the `feeding_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedingLog {
    pub id: DbId,
    pub litter_id: DbId,
    pub caretaker_id: Option<DbId>,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub feeding_time: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a feeding log. The caretaker is taken from the
/// authenticated user, not the request body.
#[derive(Debug, Deserialize)]
pub struct CreateFeedingLog {
    pub litter_id: DbId,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub feeding_time: Timestamp,
}
