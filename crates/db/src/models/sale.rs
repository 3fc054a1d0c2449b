//! Sale entity model and DTOs.

use chrono::NaiveDate;
use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full sale row from the `sales` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sale {
    pub id: DbId,
    pub booking_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub item_type: String,
    pub item_description: Option<String>,
    pub total_amount: f64,
    pub payment_date: NaiveDate,
    pub recorded_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for finalizing an approved booking into a sale. The client is
/// copied from the booking and the recorder from the authenticated
/// user; neither comes from the request body.
#[derive(Debug, Deserialize)]
pub struct CreateSale {
    pub booking_id: DbId,
    pub item_type: String,
    pub item_description: Option<String>,
    pub total_amount: f64,
    pub payment_date: NaiveDate,
}
