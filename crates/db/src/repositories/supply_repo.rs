//! Repository for the `supplies` table.

use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::supply::{CreateSupply, Supply, UpdateSupply};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, item_name, category, quantity, unit, updated_by, created_at, updated_at";

/// Provides CRUD and stock operations for supplies.
pub struct SupplyRepo;

impl SupplyRepo {
    /// Insert a new supply item.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSupply,
        updated_by: DbId,
    ) -> Result<Supply, sqlx::Error> {
        let query = format!(
            "INSERT INTO supplies (item_name, category, quantity, unit, updated_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supply>(&query)
            .bind(&input.item_name)
            .bind(&input.category)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }

    /// Find a supply item by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Supply>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM supplies WHERE id = $1");
        sqlx::query_as::<_, Supply>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all supply items, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Supply>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM supplies ORDER BY item_name");
        sqlx::query_as::<_, Supply>(&query).fetch_all(pool).await
    }

    /// Update a supply item. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSupply,
        updated_by: DbId,
    ) -> Result<Option<Supply>, sqlx::Error> {
        let query = format!(
            "UPDATE supplies SET
                item_name = COALESCE($2, item_name),
                category = COALESCE($3, category),
                quantity = COALESCE($4, quantity),
                unit = COALESCE($5, unit),
                updated_by = $6,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supply>(&query)
            .bind(id)
            .bind(&input.item_name)
            .bind(&input.category)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Adjust stock by a signed delta. The quantity floors at zero so
    /// an over-consumption does not go negative.
    pub async fn adjust_quantity(
        pool: &PgPool,
        id: DbId,
        delta: f64,
        updated_by: DbId,
    ) -> Result<Option<Supply>, sqlx::Error> {
        let query = format!(
            "UPDATE supplies SET
                quantity = GREATEST(quantity + $2, 0),
                updated_by = $3,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supply>(&query)
            .bind(id)
            .bind(delta)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a supply item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM supplies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
