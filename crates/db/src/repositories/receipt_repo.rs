//! Repository for the `reservation_receipts` table.
//!
//! Receipts are written inside `BookingRepo::decide`; this repo only
//! reads them.

use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::receipt::Receipt;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, booking_id, receipt_data, generated_at";

/// Read access to reservation receipts.
pub struct ReceiptRepo;

impl ReceiptRepo {
    /// Find a receipt by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Receipt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservation_receipts WHERE id = $1");
        sqlx::query_as::<_, Receipt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the receipt for a booking, if any (0 or 1 by constraint).
    pub async fn find_by_booking(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Option<Receipt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservation_receipts WHERE booking_id = $1");
        sqlx::query_as::<_, Receipt>(&query)
            .bind(booking_id)
            .fetch_optional(pool)
            .await
    }

    /// List all receipts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Receipt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservation_receipts ORDER BY id DESC");
        sqlx::query_as::<_, Receipt>(&query).fetch_all(pool).await
    }
}
