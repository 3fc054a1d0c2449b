//! Route definitions for the market resources: listings, bookings,
//! sales, and receipts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{booking, listing, receipt, sale};
use crate::state::AppState;

/// Routes mounted at `/listings`.
///
/// ```text
/// GET  /       -> list (any authenticated user, ?status, ?sale_type)
/// POST /       -> create (sales)
/// GET  /{id}   -> get (any authenticated user)
/// PUT  /{id}   -> update (sales)
/// ```
pub fn listings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::list).post(listing::create))
        .route("/{id}", get(listing::get_by_id).put(listing::update))
}

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET  /               -> list (clients see own, ?status, ?start, ?end)
/// POST /               -> create (any authenticated user)
/// GET  /{id}           -> get (owner or staff)
/// PUT  /{id}           -> edit non-status fields (owner or staff)
/// POST /{id}/decision  -> approve or decline (sales)
/// GET  /{id}/receipt   -> reservation receipt (owner or staff)
/// ```
pub fn bookings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking::list).post(booking::create))
        .route("/{id}", get(booking::get_by_id).put(booking::update))
        .route("/{id}/decision", post(booking::decide))
        .route("/{id}/receipt", get(receipt::get_by_booking))
}

/// Routes mounted at `/sales`.
///
/// ```text
/// GET  /       -> list (staff)
/// POST /       -> finalize an approved booking (sales)
/// GET  /{id}   -> get (staff)
/// ```
pub fn sales_router() -> Router<AppState> {
    Router::new()
        .route("/", get(sale::list).post(sale::create))
        .route("/{id}", get(sale::get_by_id))
}

/// Routes mounted at `/receipts`. Staff only.
///
/// ```text
/// GET /       -> list
/// GET /{id}   -> get
/// ```
pub fn receipts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(receipt::list))
        .route("/{id}", get(receipt::get_by_id))
}
