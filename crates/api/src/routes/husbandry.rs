//! Route definitions for the husbandry resources: pigs, litters,
//! feeding logs, health records, and supplies.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{feeding_log, health_record, litter, pig, supply};
use crate::state::AppState;

/// Routes mounted at `/pigs`.
///
/// ```text
/// GET    /       -> list (staff)
/// POST   /       -> create (caretaker)
/// GET    /{id}   -> get (staff)
/// PUT    /{id}   -> update (caretaker)
/// DELETE /{id}   -> delete (caretaker)
/// ```
pub fn pigs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pig::list).post(pig::create))
        .route(
            "/{id}",
            get(pig::get_by_id).put(pig::update).delete(pig::delete),
        )
}

/// Routes mounted at `/litters`.
///
/// ```text
/// GET    /       -> list (staff)
/// POST   /       -> create (caretaker)
/// GET    /{id}   -> get (staff)
/// PUT    /{id}   -> update (caretaker)
/// DELETE /{id}   -> delete (caretaker)
/// ```
pub fn litters_router() -> Router<AppState> {
    Router::new()
        .route("/", get(litter::list).post(litter::create))
        .route(
            "/{id}",
            get(litter::get_by_id)
                .put(litter::update)
                .delete(litter::delete),
        )
}

/// Routes mounted at `/feeding-logs`.
///
/// ```text
/// GET    /       -> list (staff, ?litter_id)
/// POST   /       -> create (caretaker)
/// GET    /{id}   -> get (staff)
/// DELETE /{id}   -> delete (caretaker)
/// ```
pub fn feeding_logs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(feeding_log::list).post(feeding_log::create))
        .route(
            "/{id}",
            get(feeding_log::get_by_id).delete(feeding_log::delete),
        )
}

/// Routes mounted at `/health-records`.
///
/// ```text
/// GET  /       -> list (staff, ?pig_id)
/// POST /       -> create (caretaker)
/// GET  /{id}   -> get (staff)
/// ```
pub fn health_records_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_record::list).post(health_record::create))
        .route("/{id}", get(health_record::get_by_id))
}

/// Routes mounted at `/supplies`.
///
/// ```text
/// GET    /              -> list (staff)
/// POST   /              -> create (procurement)
/// GET    /{id}          -> get (staff)
/// PUT    /{id}          -> update (procurement)
/// DELETE /{id}          -> delete (procurement)
/// POST   /{id}/adjust   -> signed stock delta (procurement)
/// ```
pub fn supplies_router() -> Router<AppState> {
    Router::new()
        .route("/", get(supply::list).post(supply::create))
        .route(
            "/{id}",
            get(supply::get_by_id)
                .put(supply::update)
                .delete(supply::delete),
        )
        .route("/{id}/adjust", post(supply::adjust_quantity))
}
