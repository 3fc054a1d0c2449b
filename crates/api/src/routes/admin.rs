//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/admin`. Admin only.
///
/// ```text
/// GET  /users       -> list accounts
/// POST /users       -> create a staff or client account
/// GET  /users/{id}  -> get one account
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::list).post(user::create))
        .route("/users/{id}", get(user::get_by_id))
}
