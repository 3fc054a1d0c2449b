//! Handlers for the `/supplies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::types::DbId;
use farrowgate_db::models::supply::{CreateSupply, Supply, UpdateSupply};
use farrowgate_db::repositories::SupplyRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireProcurement, RequireStaff};
use crate::state::AppState;

/// Request body for `POST /supplies/{id}/adjust`.
#[derive(Debug, Deserialize)]
pub struct AdjustQuantityRequest {
    /// Signed stock delta; negative consumes, positive restocks.
    pub delta: f64,
}

/// POST /api/v1/supplies
pub async fn create(
    RequireProcurement(staff): RequireProcurement,
    State(state): State<AppState>,
    Json(input): Json<CreateSupply>,
) -> AppResult<(StatusCode, Json<Supply>)> {
    if input.item_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Item name must not be empty".into(),
        )));
    }
    if input.quantity < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must not be negative".into(),
        )));
    }

    let supply = SupplyRepo::create(&state.pool, &input, staff.user_id).await?;
    Ok((StatusCode::CREATED, Json(supply)))
}

/// GET /api/v1/supplies
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Supply>>> {
    let supplies = SupplyRepo::list(&state.pool).await?;
    Ok(Json(supplies))
}

/// GET /api/v1/supplies/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Supply>> {
    let supply = SupplyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supply",
            id,
        }))?;
    Ok(Json(supply))
}

/// PUT /api/v1/supplies/{id}
pub async fn update(
    RequireProcurement(staff): RequireProcurement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSupply>,
) -> AppResult<Json<Supply>> {
    if let Some(quantity) = input.quantity {
        if quantity < 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "Quantity must not be negative".into(),
            )));
        }
    }

    let supply = SupplyRepo::update(&state.pool, id, &input, staff.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supply",
            id,
        }))?;
    Ok(Json(supply))
}

/// POST /api/v1/supplies/{id}/adjust
///
/// Apply a signed stock delta. The stored quantity floors at zero.
pub async fn adjust_quantity(
    RequireProcurement(staff): RequireProcurement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AdjustQuantityRequest>,
) -> AppResult<Json<Supply>> {
    let supply = SupplyRepo::adjust_quantity(&state.pool, id, input.delta, staff.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supply",
            id,
        }))?;
    Ok(Json(supply))
}

/// DELETE /api/v1/supplies/{id}
pub async fn delete(
    RequireProcurement(_staff): RequireProcurement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = SupplyRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Supply",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
