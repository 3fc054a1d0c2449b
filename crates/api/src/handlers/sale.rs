//! Handlers for the `/sales` resource.
//!
//! Recording a sale is the terminal step of the booking lifecycle: the
//! booking must be approved, the sale inserted, and the linked pigs'
//! listings flipped to `sold` in one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::market::{BookingStatus, ListingStatus};
use farrowgate_core::types::DbId;
use farrowgate_db::models::audit_event::CreateAuditEvent;
use farrowgate_db::models::sale::{CreateSale, Sale};
use farrowgate_db::repositories::{AuditRepo, BookingRepo, ListingRepo, SaleRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireSales, RequireStaff};
use crate::state::AppState;

/// POST /api/v1/sales
///
/// Finalize an approved booking into a sale. Pre-validates the booking
/// state and the pig set so failures name the exact problem; the
/// finalization transaction and unique constraints backstop races the
/// pre-checks cannot close.
pub async fn create(
    RequireSales(staff): RequireSales,
    State(state): State<AppState>,
    Json(input): Json<CreateSale>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    // 1. The booking must exist and be approved.
    let booking = BookingRepo::find_by_id(&state.pool, input.booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: input.booking_id,
        }))?;

    if booking.status != BookingStatus::Approved.as_str() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Booking is {}; only approved bookings can be sold",
            booking.status
        ))));
    }

    // 2. At most one sale per booking.
    if SaleRepo::find_by_booking(&state.pool, input.booking_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A sale was already recorded for this booking".into(),
        )));
    }

    // 3. The pig set and its current listings.
    let pig_ids = BookingRepo::pig_ids(&state.pool, booking.id).await?;
    if pig_ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Booking has no linked pigs to sell".into(),
        )));
    }

    let listings = ListingRepo::find_latest_by_pigs(&state.pool, &pig_ids).await?;
    if listings.len() != pig_ids.len() {
        let listed: Vec<DbId> = listings.iter().map(|l| l.pig_id).collect();
        let unlisted: Vec<DbId> = pig_ids
            .iter()
            .copied()
            .filter(|id| !listed.contains(id))
            .collect();
        return Err(AppError::Core(CoreError::Validation(format!(
            "Pigs without a listing cannot be sold: {unlisted:?}"
        ))));
    }

    let already_sold: Vec<DbId> = listings
        .iter()
        .filter(|l| l.status == ListingStatus::Sold.as_str())
        .map(|l| l.pig_id)
        .collect();
    if !already_sold.is_empty() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Pigs already sold: {already_sold:?}"
        ))));
    }

    if input.total_amount <= 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Total amount must be positive".into(),
        )));
    }

    // 4. Atomic finalization: sale insert + listings to `sold`. A
    //    concurrent duplicate hits uq_sales_booking and surfaces as 409.
    let sale = SaleRepo::finalize(
        &state.pool,
        &input,
        Some(booking.client_id),
        staff.user_id,
        &pig_ids,
    )
    .await?;

    AuditRepo::record(
        &state.pool,
        &CreateAuditEvent {
            entity_type: "sale",
            entity_id: sale.id,
            action: "recorded",
            recorded_by: Some(staff.user_id),
            details: None,
        },
    )
    .await?;

    tracing::info!(sale_id = sale.id, booking_id = booking.id, "Sale recorded");
    Ok((StatusCode::CREATED, Json(sale)))
}

/// GET /api/v1/sales
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Sale>>> {
    let sales = SaleRepo::list(&state.pool).await?;
    Ok(Json(sales))
}

/// GET /api/v1/sales/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Sale>> {
    let sale = SaleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Sale", id }))?;
    Ok(Json(sale))
}
