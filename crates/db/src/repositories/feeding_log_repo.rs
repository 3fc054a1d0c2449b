//! Repository for the `feeding_logs` table.

use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::feeding_log::{CreateFeedingLog, FeedingLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, litter_id, caretaker_id, feed_type, quantity_kg, feeding_time, created_at";

/// Provides operations for feeding logs.
pub struct FeedingLogRepo;

impl FeedingLogRepo {
    /// Insert a new feeding log, recording the acting caretaker.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFeedingLog,
        caretaker_id: DbId,
    ) -> Result<FeedingLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO feeding_logs (litter_id, caretaker_id, feed_type, quantity_kg, feeding_time)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedingLog>(&query)
            .bind(input.litter_id)
            .bind(caretaker_id)
            .bind(&input.feed_type)
            .bind(input.quantity_kg)
            .bind(input.feeding_time)
            .fetch_one(pool)
            .await
    }

    /// Find a feeding log by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FeedingLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feeding_logs WHERE id = $1");
        sqlx::query_as::<_, FeedingLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all feeding logs, most recent feeding first.
    pub async fn list(pool: &PgPool) -> Result<Vec<FeedingLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feeding_logs ORDER BY feeding_time DESC");
        sqlx::query_as::<_, FeedingLog>(&query).fetch_all(pool).await
    }

    /// List feeding logs for one litter, most recent feeding first.
    pub async fn list_by_litter(
        pool: &PgPool,
        litter_id: DbId,
    ) -> Result<Vec<FeedingLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feeding_logs WHERE litter_id = $1 ORDER BY feeding_time DESC"
        );
        sqlx::query_as::<_, FeedingLog>(&query)
            .bind(litter_id)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a feeding log. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feeding_logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
