//! Handlers for the `/feeding-logs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::types::DbId;
use farrowgate_db::models::feeding_log::{CreateFeedingLog, FeedingLog};
use farrowgate_db::repositories::{FeedingLogRepo, LitterRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireCaretaker, RequireStaff};
use crate::state::AppState;

/// Query filters for listing feeding logs.
#[derive(Debug, Default, Deserialize)]
pub struct FeedingLogFilter {
    pub litter_id: Option<DbId>,
}

/// POST /api/v1/feeding-logs
///
/// Record a feeding. The caretaker is the authenticated user.
pub async fn create(
    RequireCaretaker(caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Json(input): Json<CreateFeedingLog>,
) -> AppResult<(StatusCode, Json<FeedingLog>)> {
    if input.quantity_kg <= 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Feed quantity must be positive".into(),
        )));
    }
    if input.feed_type.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Feed type must not be empty".into(),
        )));
    }

    LitterRepo::find_by_id(&state.pool, input.litter_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Litter",
            id: input.litter_id,
        }))?;

    let log = FeedingLogRepo::create(&state.pool, &input, caretaker.user_id).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/v1/feeding-logs
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(filter): Query<FeedingLogFilter>,
) -> AppResult<Json<Vec<FeedingLog>>> {
    let logs = match filter.litter_id {
        Some(litter_id) => FeedingLogRepo::list_by_litter(&state.pool, litter_id).await?,
        None => FeedingLogRepo::list(&state.pool).await?,
    };
    Ok(Json(logs))
}

/// GET /api/v1/feeding-logs/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FeedingLog>> {
    let log = FeedingLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feeding log",
            id,
        }))?;
    Ok(Json(log))
}

/// DELETE /api/v1/feeding-logs/{id}
pub async fn delete(
    RequireCaretaker(_caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = FeedingLogRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Feeding log",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
