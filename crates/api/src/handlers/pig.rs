//! Handlers for the `/pigs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::types::DbId;
use farrowgate_db::models::pig::{CreatePig, Pig, UpdatePig};
use farrowgate_db::repositories::{LitterRepo, PigRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireCaretaker, RequireStaff};
use crate::state::AppState;

/// POST /api/v1/pigs
pub async fn create(
    RequireCaretaker(_caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Json(input): Json<CreatePig>,
) -> AppResult<(StatusCode, Json<Pig>)> {
    if let Some(litter_id) = input.litter_id {
        LitterRepo::find_by_id(&state.pool, litter_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Litter",
                id: litter_id,
            }))?;
    }

    let pig = PigRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(pig)))
}

/// GET /api/v1/pigs
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Pig>>> {
    let pigs = PigRepo::list(&state.pool).await?;
    Ok(Json(pigs))
}

/// GET /api/v1/pigs/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Pig>> {
    let pig = PigRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pig", id }))?;
    Ok(Json(pig))
}

/// PUT /api/v1/pigs/{id}
pub async fn update(
    RequireCaretaker(_caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePig>,
) -> AppResult<Json<Pig>> {
    let pig = PigRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pig", id }))?;
    Ok(Json(pig))
}

/// DELETE /api/v1/pigs/{id}
pub async fn delete(
    RequireCaretaker(_caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = PigRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound { entity: "Pig", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
