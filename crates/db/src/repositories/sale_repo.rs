//! Repository for the `sales` table.

use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::sale::{CreateSale, Sale};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, booking_id, client_id, item_type, item_description, total_amount, \
    payment_date, recorded_by, created_at";

/// Provides sale records and the booking-to-sale finalization.
pub struct SaleRepo;

impl SaleRepo {
    /// Find a sale by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sale>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sales WHERE id = $1");
        sqlx::query_as::<_, Sale>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the sale referencing a booking, if any (0 or 1 by constraint).
    pub async fn find_by_booking(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Option<Sale>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sales WHERE booking_id = $1");
        sqlx::query_as::<_, Sale>(&query)
            .bind(booking_id)
            .fetch_optional(pool)
            .await
    }

    /// List all sales, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Sale>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sales ORDER BY id DESC");
        sqlx::query_as::<_, Sale>(&query).fetch_all(pool).await
    }

    /// Finalize an approved booking into a sale, atomically flipping
    /// the linked pigs' listings to `sold`.
    ///
    /// One transaction:
    /// 1. insert the sale row -- the `uq_sales_booking` constraint makes
    ///    a concurrent duplicate attempt fail with a unique violation
    ///    instead of silently double-selling;
    /// 2. lock the sellable (available/reserved) listing rows of the
    ///    pig set `FOR UPDATE` in id order;
    /// 3. flip exactly those rows to `sold`. The status re-filter means
    ///    a listing a concurrent transaction already sold is not
    ///    flipped twice.
    ///
    /// The caller pre-validates booking status, duplicate sales, and
    /// sold listings so callers get actionable errors; this transaction
    /// is the backstop for races those checks cannot close.
    pub async fn finalize(
        pool: &PgPool,
        input: &CreateSale,
        client_id: Option<DbId>,
        recorded_by: DbId,
        pig_ids: &[DbId],
    ) -> Result<Sale, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO sales
                (booking_id, client_id, item_type, item_description, total_amount, payment_date, recorded_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let sale = sqlx::query_as::<_, Sale>(&query)
            .bind(input.booking_id)
            .bind(client_id)
            .bind(&input.item_type)
            .bind(&input.item_description)
            .bind(input.total_amount)
            .bind(input.payment_date)
            .bind(recorded_by)
            .fetch_one(&mut *tx)
            .await?;

        let locked: Vec<DbId> = sqlx::query_scalar(
            "SELECT id FROM listings
             WHERE pig_id = ANY($1) AND status IN ('available', 'reserved')
             ORDER BY id
             FOR UPDATE",
        )
        .bind(pig_ids)
        .fetch_all(&mut *tx)
        .await?;

        if !locked.is_empty() {
            sqlx::query(
                "UPDATE listings SET status = 'sold', updated_at = now()
                 WHERE id = ANY($1)",
            )
            .bind(&locked)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(sale)
    }
}
