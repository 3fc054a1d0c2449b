//! Repository for the `litters` table.

use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::litter::{CreateLitter, Litter, UpdateLitter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, litter_size, birth_date, sow_identifier, caretaker_id, created_at, updated_at";

/// Provides CRUD operations for litters.
pub struct LitterRepo;

impl LitterRepo {
    /// Insert a new litter.
    pub async fn create(pool: &PgPool, input: &CreateLitter) -> Result<Litter, sqlx::Error> {
        let query = format!(
            "INSERT INTO litters (litter_size, birth_date, sow_identifier, caretaker_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Litter>(&query)
            .bind(input.litter_size)
            .bind(input.birth_date)
            .bind(&input.sow_identifier)
            .bind(input.caretaker_id)
            .fetch_one(pool)
            .await
    }

    /// Find a litter by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Litter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM litters WHERE id = $1");
        sqlx::query_as::<_, Litter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all litters, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Litter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM litters ORDER BY id DESC");
        sqlx::query_as::<_, Litter>(&query).fetch_all(pool).await
    }

    /// Update a litter. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLitter,
    ) -> Result<Option<Litter>, sqlx::Error> {
        let query = format!(
            "UPDATE litters SET
                litter_size = COALESCE($2, litter_size),
                birth_date = COALESCE($3, birth_date),
                sow_identifier = COALESCE($4, sow_identifier),
                caretaker_id = COALESCE($5, caretaker_id),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Litter>(&query)
            .bind(id)
            .bind(input.litter_size)
            .bind(input.birth_date)
            .bind(&input.sow_identifier)
            .bind(input.caretaker_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a litter by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM litters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
