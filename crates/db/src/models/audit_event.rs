//! Audit event model and DTOs. Append-only; no update DTO exists.

use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single audit trail entry from the `audit_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditEvent {
    pub id: DbId,
    pub entity_type: String,
    pub entity_id: DbId,
    pub action: String,
    pub recorded_by: Option<DbId>,
    pub details: Option<serde_json::Value>,
    pub recorded_at: Timestamp,
}

/// DTO for appending an audit event.
#[derive(Debug, Clone)]
pub struct CreateAuditEvent {
    pub entity_type: &'static str,
    pub entity_id: DbId,
    pub action: &'static str,
    pub recorded_by: Option<DbId>,
    pub details: Option<serde_json::Value>,
}

/// Filter parameters for querying the audit trail.
#[derive(Debug, Default, Deserialize)]
pub struct AuditQuery {
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub recorded_by: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
