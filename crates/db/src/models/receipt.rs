//! Reservation receipt entity model.
//!
//! A receipt is an immutable snapshot generated exactly once when a
//! booking is approved (`uq_receipts_booking` enforces the once).

use farrowgate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full receipt row from the `reservation_receipts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Receipt {
    pub id: DbId,
    pub booking_id: DbId,
    /// JSON snapshot: receipt number, generation time, client, type,
    /// item details, booking date, status, approver.
    pub receipt_data: serde_json::Value,
    pub generated_at: Timestamp,
}
