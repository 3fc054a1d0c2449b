//! Repository for the `bookings` table and its pig link rows.
//!
//! The decision transition is the one multi-step mutation here: status
//! change, listing reservation, and receipt generation commit as a
//! single transaction or not at all.

use farrowgate_core::market::Decision;
use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, BookingQuery, UpdateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, booking_type, item_details, status, booking_date, \
    approved_by, created_at, updated_at";

/// Provides booking lifecycle operations.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a booking (status `pending`) and its pig link rows as one
    /// transaction. `pig_ids` must already be deduplicated and
    /// validated against the pigs table.
    pub async fn create_with_pigs(
        pool: &PgPool,
        client_id: DbId,
        booking_type: &str,
        item_details: Option<&str>,
        booking_date: chrono::NaiveDate,
        pig_ids: &[DbId],
    ) -> Result<Booking, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO bookings (client_id, booking_type, item_details, status, booking_date)
             VALUES ($1, $2, $3, 'pending', $4)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(client_id)
            .bind(booking_type)
            .bind(item_details)
            .bind(booking_date)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO booking_pigs (booking_id, pig_id)
             SELECT $1, unnest($2::bigint[])",
        )
        .bind(booking.id)
        .bind(pig_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(booking)
    }

    /// Find a booking by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Pig ids linked to a booking, in stable id order.
    pub async fn pig_ids(pool: &PgPool, booking_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT pig_id FROM booking_pigs WHERE booking_id = $1 ORDER BY pig_id")
            .bind(booking_id)
            .fetch_all(pool)
            .await
    }

    /// List bookings with optional status/date filters. When
    /// `client_id` is given, only that client's bookings are returned
    /// (clients may not see each other's bookings).
    pub async fn list(
        pool: &PgPool,
        client_id: Option<DbId>,
        filter: &BookingQuery,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE ($1::bigint IS NULL OR client_id = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::date IS NULL OR booking_date >= $3)
               AND ($4::date IS NULL OR booking_date <= $4)
             ORDER BY booking_date DESC, id DESC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(client_id)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.start)
            .bind(filter.end)
            .fetch_all(pool)
            .await
    }

    /// Edit non-status fields. Only non-`None` fields are applied.
    pub async fn update_details(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET
                booking_type = COALESCE($2, booking_type),
                item_details = COALESCE($3, item_details),
                booking_date = COALESCE($4, booking_date),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.booking_type.map(|t| t.as_str()))
            .bind(&input.item_details)
            .bind(input.booking_date)
            .fetch_optional(pool)
            .await
    }

    /// Apply a staff decision to a pending booking.
    ///
    /// Returns `None` if the booking is not in `pending` (the terminal
    /// transition happens exactly once; a concurrent decision loses the
    /// `WHERE status = 'pending'` race and sees `None`).
    ///
    /// The approved path runs as one transaction:
    /// 1. flip the booking to `approved` and record the approver;
    /// 2. lock the listing rows of the linked pigs `FOR UPDATE` in id
    ///    order (stable order avoids lock-ordering deadlocks between
    ///    overlapping bookings);
    /// 3. flip listings currently `available` to `reserved` -- pigs
    ///    whose listings are in any other state are left untouched;
    /// 4. insert the receipt snapshot, `ON CONFLICT DO NOTHING` on the
    ///    unique booking reference so re-approval attempts cannot
    ///    duplicate it.
    ///
    /// Any failure aborts the whole transaction.
    pub async fn decide(
        pool: &PgPool,
        id: DbId,
        decision: Decision,
        approver: DbId,
        receipt_snapshot: &serde_json::Value,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE bookings SET status = $2, approved_by = $3, updated_at = now()
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        let Some(booking) = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(decision.target_status().as_str())
            .bind(approver)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if decision == Decision::Approved {
            let pig_ids: Vec<DbId> = sqlx::query_scalar(
                "SELECT pig_id FROM booking_pigs WHERE booking_id = $1 ORDER BY pig_id",
            )
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;

            if !pig_ids.is_empty() {
                let locked: Vec<DbId> = sqlx::query_scalar(
                    "SELECT id FROM listings
                     WHERE pig_id = ANY($1) AND status = 'available'
                     ORDER BY id
                     FOR UPDATE",
                )
                .bind(&pig_ids)
                .fetch_all(&mut *tx)
                .await?;

                if !locked.is_empty() {
                    sqlx::query(
                        "UPDATE listings SET status = 'reserved', updated_at = now()
                         WHERE id = ANY($1)",
                    )
                    .bind(&locked)
                    .execute(&mut *tx)
                    .await?;
                }
            }

            sqlx::query(
                "INSERT INTO reservation_receipts (booking_id, receipt_data)
                 VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_receipts_booking DO NOTHING",
            )
            .bind(id)
            .bind(receipt_snapshot)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(booking))
    }
}
