//! Handlers for the audit trail. Read-only; events are appended by the
//! flows they describe.

use axum::extract::{Query, State};
use axum::Json;
use farrowgate_db::models::audit_event::{AuditEvent, AuditQuery};
use farrowgate_db::repositories::AuditRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/audit
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<AuditQuery>,
) -> AppResult<Json<Vec<AuditEvent>>> {
    let events = AuditRepo::list(&state.pool, &filter).await?;
    Ok(Json(events))
}
