//! Repository for the `pigs` table.

use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::pig::{CreatePig, Pig, UpdatePig};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, litter_id, sow_identifier, birth_date, status, notes, created_at, updated_at";

/// Provides CRUD operations for pigs.
pub struct PigRepo;

impl PigRepo {
    /// Insert a new pig.
    pub async fn create(pool: &PgPool, input: &CreatePig) -> Result<Pig, sqlx::Error> {
        let query = format!(
            "INSERT INTO pigs (litter_id, sow_identifier, birth_date, status, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pig>(&query)
            .bind(input.litter_id)
            .bind(&input.sow_identifier)
            .bind(input.birth_date)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a pig by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pigs WHERE id = $1");
        sqlx::query_as::<_, Pig>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pigs, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Pig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pigs ORDER BY id DESC");
        sqlx::query_as::<_, Pig>(&query).fetch_all(pool).await
    }

    /// Update a pig. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePig,
    ) -> Result<Option<Pig>, sqlx::Error> {
        let query = format!(
            "UPDATE pigs SET
                litter_id = COALESCE($2, litter_id),
                sow_identifier = COALESCE($3, sow_identifier),
                birth_date = COALESCE($4, birth_date),
                status = COALESCE($5, status),
                notes = COALESCE($6, notes),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pig>(&query)
            .bind(id)
            .bind(input.litter_id)
            .bind(&input.sow_identifier)
            .bind(input.birth_date)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a pig by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pigs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Of the given ids, return the ones that exist. Used to report
    /// unknown pig references by id when validating bookings.
    pub async fn filter_existing(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM pigs WHERE id = ANY($1) ORDER BY id")
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
