//! Repository for the `listings` table.
//!
//! Listings are never deleted; they only transition through statuses.
//! The booking-approval and sale-finalization transitions live in
//! `BookingRepo::decide` and `SaleRepo::finalize` because those flips
//! must commit atomically with their parent records.

use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing::{CreateListing, Listing, ListingQuery, UpdateListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, pig_id, weight_kg, sale_type, status, listed_by, notes, created_at, updated_at";

/// Provides operations for market listings.
pub struct ListingRepo;

impl ListingRepo {
    /// Insert a new listing with status `available`.
    ///
    /// Fails with a unique violation on `uq_listings_active_pig` if the
    /// pig already has an active (available/reserved) listing.
    pub async fn create(
        pool: &PgPool,
        input: &CreateListing,
        listed_by: DbId,
    ) -> Result<Listing, sqlx::Error> {
        let query = format!(
            "INSERT INTO listings (pig_id, weight_kg, sale_type, status, listed_by, notes)
             VALUES ($1, $2, $3, 'available', $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(input.pig_id)
            .bind(input.weight_kg)
            .bind(input.sale_type.as_str())
            .bind(listed_by)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a listing by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = $1");
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List listings with optional status / sale-type filters, newest first.
    pub async fn list(pool: &PgPool, filter: &ListingQuery) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM listings
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::text IS NULL OR sale_type = $2)
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.sale_type.map(|t| t.as_str()))
            .fetch_all(pool)
            .await
    }

    /// Apply a staff update. Only non-`None` fields in `input` are applied.
    ///
    /// `sold` and `removed` are terminal for a row: a status edit that
    /// would move a listing out of either matches no row and returns
    /// `None`, same as a missing id. Relisting a pig inserts a new row
    /// via [`ListingRepo::create`]. Non-status edits to terminal rows
    /// still apply.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateListing,
    ) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!(
            "UPDATE listings SET
                weight_kg = COALESCE($2, weight_kg),
                sale_type = COALESCE($3, sale_type),
                status = COALESCE($4, status),
                notes = COALESCE($5, notes),
                updated_at = now()
             WHERE id = $1
               AND ($4::text IS NULL
                    OR $4 = status
                    OR status NOT IN ('sold', 'removed'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(input.weight_kg)
            .bind(input.sale_type.map(|t| t.as_str()))
            .bind(input.status.map(|s| s.as_str()))
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Latest listing per pig for the given pig set (any status),
    /// newest row wins. Sale pre-validation uses this to detect pigs
    /// with no listing at all and pigs whose listing is already sold.
    pub async fn find_latest_by_pigs(
        pool: &PgPool,
        pig_ids: &[DbId],
    ) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT ON (pig_id) {COLUMNS} FROM listings
             WHERE pig_id = ANY($1)
             ORDER BY pig_id, id DESC"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(pig_ids)
            .fetch_all(pool)
            .await
    }
}
