//! Route definitions for the audit trail.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audit`. Admin only.
///
/// ```text
/// GET / -> list events (?entity_type, ?entity_id, ?recorded_by, ?limit, ?offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit::list))
}
