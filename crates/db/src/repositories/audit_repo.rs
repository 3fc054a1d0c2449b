//! Repository for the append-only `audit_events` table.

use sqlx::PgPool;

use crate::models::audit_event::{AuditEvent, AuditQuery, CreateAuditEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, entity_type, entity_id, action, recorded_by, details, recorded_at";

/// Default page size when a query gives no limit.
const DEFAULT_LIMIT: i64 = 100;

/// Provides append and query operations for the audit trail.
pub struct AuditRepo;

impl AuditRepo {
    /// Append one audit event.
    pub async fn record(pool: &PgPool, input: &CreateAuditEvent) -> Result<AuditEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_events (entity_type, entity_id, action, recorded_by, details)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditEvent>(&query)
            .bind(input.entity_type)
            .bind(input.entity_id)
            .bind(input.action)
            .bind(input.recorded_by)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// Query the trail with optional filters, newest first.
    pub async fn list(pool: &PgPool, filter: &AuditQuery) -> Result<Vec<AuditEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_events
             WHERE ($1::text IS NULL OR entity_type = $1)
               AND ($2::bigint IS NULL OR entity_id = $2)
               AND ($3::bigint IS NULL OR recorded_by = $3)
             ORDER BY id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, AuditEvent>(&query)
            .bind(&filter.entity_type)
            .bind(filter.entity_id)
            .bind(filter.recorded_by)
            .bind(filter.limit.unwrap_or(DEFAULT_LIMIT))
            .bind(filter.offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }
}
