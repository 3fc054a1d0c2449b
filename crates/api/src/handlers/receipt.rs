//! Handlers for reservation receipts.
//!
//! Receipts are generated inside the booking approval transaction and
//! are read-only here.

use axum::extract::{Path, State};
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::roles::ROLE_CLIENT;
use farrowgate_core::types::DbId;
use farrowgate_db::models::receipt::Receipt;
use farrowgate_db::repositories::{BookingRepo, ReceiptRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// GET /api/v1/receipts
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Receipt>>> {
    let receipts = ReceiptRepo::list(&state.pool).await?;
    Ok(Json(receipts))
}

/// GET /api/v1/receipts/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Receipt>> {
    let receipt = ReceiptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Receipt",
            id,
        }))?;
    Ok(Json(receipt))
}

/// GET /api/v1/bookings/{id}/receipt
///
/// Fetch the receipt for a booking. Clients may only view their own.
pub async fn get_by_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(booking_id): Path<DbId>,
) -> AppResult<Json<Receipt>> {
    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;

    if user.role == ROLE_CLIENT && booking.client_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only view receipts for your own bookings".into(),
        )));
    }

    let receipt = ReceiptRepo::find_by_booking(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Receipt",
            id: booking_id,
        }))?;
    Ok(Json(receipt))
}
