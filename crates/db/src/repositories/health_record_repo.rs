//! Repository for the `pig_health_records` table.

use farrowgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::health_record::{CreateHealthRecord, HealthRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, pig_id, symptoms, diagnosis, treatment, treatment_supply_id, \
    mortality, caretaker_id, recorded_at";

/// Provides operations for pig health records.
pub struct HealthRecordRepo;

impl HealthRecordRepo {
    /// Insert a new health record, recording the acting caretaker.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHealthRecord,
        caretaker_id: DbId,
    ) -> Result<HealthRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO pig_health_records
                (pig_id, symptoms, diagnosis, treatment, treatment_supply_id, mortality, caretaker_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HealthRecord>(&query)
            .bind(input.pig_id)
            .bind(&input.symptoms)
            .bind(&input.diagnosis)
            .bind(&input.treatment)
            .bind(input.treatment_supply_id)
            .bind(input.mortality)
            .bind(caretaker_id)
            .fetch_one(pool)
            .await
    }

    /// Find a health record by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HealthRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pig_health_records WHERE id = $1");
        sqlx::query_as::<_, HealthRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all health records, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<HealthRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pig_health_records ORDER BY recorded_at DESC");
        sqlx::query_as::<_, HealthRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// List health records for one pig, newest first.
    pub async fn list_by_pig(pool: &PgPool, pig_id: DbId) -> Result<Vec<HealthRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pig_health_records WHERE pig_id = $1 ORDER BY recorded_at DESC"
        );
        sqlx::query_as::<_, HealthRecord>(&query)
            .bind(pig_id)
            .fetch_all(pool)
            .await
    }
}
