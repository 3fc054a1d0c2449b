//! Handlers for the `/bookings` resource.
//!
//! A booking's status only ever changes through the decision endpoint.
//! The approval side effects (listing reservation, receipt) commit
//! atomically inside `BookingRepo::decide`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use farrowgate_core::error::CoreError;
use farrowgate_core::market::{BookingStatus, Decision};
use farrowgate_core::roles::ROLE_CLIENT;
use farrowgate_core::types::DbId;
use farrowgate_db::models::audit_event::CreateAuditEvent;
use farrowgate_db::models::booking::{
    Booking, BookingDecision, BookingQuery, BookingWithPigs, CreateBooking, UpdateBooking,
};
use farrowgate_db::repositories::{AuditRepo, BookingRepo, PigRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireSales;
use crate::state::AppState;

/// Attach the linked pig ids to a booking row.
async fn with_pigs(state: &AppState, booking: Booking) -> AppResult<BookingWithPigs> {
    let pig_ids = BookingRepo::pig_ids(&state.pool, booking.id).await?;
    Ok(BookingWithPigs { booking, pig_ids })
}

/// POST /api/v1/bookings
///
/// Create a booking for the authenticated user. Status is forced to
/// `pending` and the client to the requester; neither comes from the
/// body.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingWithPigs>)> {
    // 1. Deduplicate the pig set, preserving order.
    let mut pig_ids: Vec<DbId> = Vec::with_capacity(input.pig_ids.len());
    for id in &input.pig_ids {
        if !pig_ids.contains(id) {
            pig_ids.push(*id);
        }
    }
    if pig_ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A booking must reference at least one pig".into(),
        )));
    }

    // 2. Every referenced pig must exist; name the unknown ones.
    let existing = PigRepo::filter_existing(&state.pool, &pig_ids).await?;
    let missing: Vec<DbId> = pig_ids
        .iter()
        .copied()
        .filter(|id| !existing.contains(id))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown pig ids: {missing:?}"
        ))));
    }

    // 3. Persist booking + link rows in one transaction.
    let booking = BookingRepo::create_with_pigs(
        &state.pool,
        user.user_id,
        input.booking_type.as_str(),
        input.item_details.as_deref(),
        input.booking_date,
        &pig_ids,
    )
    .await?;

    tracing::info!(booking_id = booking.id, client_id = user.user_id, "Booking created");
    Ok((
        StatusCode::CREATED,
        Json(BookingWithPigs { booking, pig_ids }),
    ))
}

/// GET /api/v1/bookings
///
/// Staff see all bookings; clients only their own.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(filter): Query<BookingQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let scope = (user.role == ROLE_CLIENT).then_some(user.user_id);
    let bookings = BookingRepo::list(&state.pool, scope, &filter).await?;
    Ok(Json(bookings))
}

/// GET /api/v1/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookingWithPigs>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    if user.role == ROLE_CLIENT && booking.client_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only view your own bookings".into(),
        )));
    }

    with_pigs(&state, booking).await.map(Json)
}

/// PUT /api/v1/bookings/{id}
///
/// Edit non-status fields. Status and approver can only change through
/// the decision endpoint; attempts here are rejected with a conflict.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<BookingWithPigs>> {
    if input.status.is_some() || input.approved_by.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Booking status changes go through the decision endpoint".into(),
        )));
    }

    let existing = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    if user.role == ROLE_CLIENT && existing.client_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only edit your own bookings".into(),
        )));
    }

    let booking = BookingRepo::update_details(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    with_pigs(&state, booking).await.map(Json)
}

/// POST /api/v1/bookings/{id}/decision
///
/// Apply a staff decision to a pending booking. The approved path
/// reserves available listings and generates the receipt snapshot in
/// the same transaction as the status flip.
pub async fn decide(
    RequireSales(staff): RequireSales,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BookingDecision>,
) -> AppResult<Json<BookingWithPigs>> {
    // 1. Resolve and gate on status for a meaningful error. The
    //    transition itself re-checks inside the transaction.
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    if booking.status != BookingStatus::Pending.as_str() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Booking is already {}; a decision applies exactly once",
            booking.status
        ))));
    }

    // 2. Build the receipt snapshot. Only persisted on approval.
    let snapshot = serde_json::json!({
        "receipt_no": format!("RCPT-{id:06}"),
        "generated_at": Utc::now(),
        "client_id": booking.client_id,
        "booking_type": booking.booking_type,
        "item_details": booking.item_details,
        "booking_date": booking.booking_date,
        "status": input.decision.target_status().as_str(),
        "approved_by": staff.user_id,
    });

    // 3. Apply. `None` means another decision won the race.
    let decided = BookingRepo::decide(&state.pool, id, input.decision, staff.user_id, &snapshot)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Booking was decided concurrently; a decision applies exactly once".into(),
            ))
        })?;

    // 4. Audit trail.
    let action = match input.decision {
        Decision::Approved => "approved",
        Decision::Declined => "declined",
    };
    AuditRepo::record(
        &state.pool,
        &CreateAuditEvent {
            entity_type: "booking",
            entity_id: id,
            action,
            recorded_by: Some(staff.user_id),
            details: None,
        },
    )
    .await?;

    tracing::info!(booking_id = id, action, "Booking decided");
    with_pigs(&state, decided).await.map(Json)
}
