//! Handlers for the `/litters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::types::DbId;
use farrowgate_db::models::litter::{CreateLitter, Litter, UpdateLitter};
use farrowgate_db::repositories::LitterRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireCaretaker, RequireStaff};
use crate::state::AppState;

/// POST /api/v1/litters
pub async fn create(
    RequireCaretaker(_caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Json(input): Json<CreateLitter>,
) -> AppResult<(StatusCode, Json<Litter>)> {
    if let Some(size) = input.litter_size {
        if size <= 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Litter size must be positive".into(),
            )));
        }
    }

    let litter = LitterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(litter)))
}

/// GET /api/v1/litters
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Litter>>> {
    let litters = LitterRepo::list(&state.pool).await?;
    Ok(Json(litters))
}

/// GET /api/v1/litters/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Litter>> {
    let litter = LitterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Litter",
            id,
        }))?;
    Ok(Json(litter))
}

/// PUT /api/v1/litters/{id}
pub async fn update(
    RequireCaretaker(_caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLitter>,
) -> AppResult<Json<Litter>> {
    if let Some(size) = input.litter_size {
        if size <= 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Litter size must be positive".into(),
            )));
        }
    }

    let litter = LitterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Litter",
            id,
        }))?;
    Ok(Json(litter))
}

/// DELETE /api/v1/litters/{id}
pub async fn delete(
    RequireCaretaker(_caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = LitterRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Litter",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
