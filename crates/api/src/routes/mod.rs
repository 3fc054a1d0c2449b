pub mod admin;
pub mod audit;
pub mod auth;
pub mod health;
pub mod husbandry;
pub mod market;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
/// /auth/register              client self-registration (public, token-gated)
/// /auth/otp/start             issue verification code (public)
/// /auth/otp/verify            verify code, mint token (public)
///
/// /admin/users                list, create (admin only)
/// /admin/users/{id}           get
///
/// /pigs                       list, create
/// /pigs/{id}                  get, update, delete
/// /litters                    list, create
/// /litters/{id}               get, update, delete
/// /feeding-logs               list, create
/// /feeding-logs/{id}          get, delete
/// /health-records             list, create
/// /health-records/{id}        get
/// /supplies                   list, create
/// /supplies/{id}              get, update, delete
/// /supplies/{id}/adjust       signed stock delta (POST)
///
/// /listings                   list, create
/// /listings/{id}              get, update
/// /bookings                   list, create
/// /bookings/{id}              get, update
/// /bookings/{id}/decision     approve or decline (POST)
/// /bookings/{id}/receipt      reservation receipt (GET)
/// /sales                      list, record
/// /sales/{id}                 get
/// /receipts                   list
/// /receipts/{id}              get
///
/// /audit                      list events (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication: login, registration, and the OTP flow.
        .nest("/auth", auth::router())
        // Admin account management.
        .nest("/admin", admin::router())
        // Husbandry: pigs, litters, feeding, health, supplies.
        .nest("/pigs", husbandry::pigs_router())
        .nest("/litters", husbandry::litters_router())
        .nest("/feeding-logs", husbandry::feeding_logs_router())
        .nest("/health-records", husbandry::health_records_router())
        .nest("/supplies", husbandry::supplies_router())
        // Market: listings, the booking lifecycle, sales, receipts.
        .nest("/listings", market::listings_router())
        .nest("/bookings", market::bookings_router())
        .nest("/sales", market::sales_router())
        .nest("/receipts", market::receipts_router())
        // Append-only audit trail.
        .nest("/audit", audit::router())
}
