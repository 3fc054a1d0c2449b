//! Handlers for the `/health-records` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::types::DbId;
use farrowgate_db::models::health_record::{CreateHealthRecord, HealthRecord};
use farrowgate_db::repositories::{HealthRecordRepo, PigRepo, SupplyRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireCaretaker, RequireStaff};
use crate::state::AppState;

/// Query filters for listing health records.
#[derive(Debug, Default, Deserialize)]
pub struct HealthRecordFilter {
    pub pig_id: Option<DbId>,
}

/// POST /api/v1/health-records
///
/// Record a health event for a pig. Both the pig and the treatment
/// supply must exist; the caretaker is the authenticated user.
pub async fn create(
    RequireCaretaker(caretaker): RequireCaretaker,
    State(state): State<AppState>,
    Json(input): Json<CreateHealthRecord>,
) -> AppResult<(StatusCode, Json<HealthRecord>)> {
    PigRepo::find_by_id(&state.pool, input.pig_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pig",
            id: input.pig_id,
        }))?;

    SupplyRepo::find_by_id(&state.pool, input.treatment_supply_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supply",
            id: input.treatment_supply_id,
        }))?;

    let record = HealthRecordRepo::create(&state.pool, &input, caretaker.user_id).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/health-records
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(filter): Query<HealthRecordFilter>,
) -> AppResult<Json<Vec<HealthRecord>>> {
    let records = match filter.pig_id {
        Some(pig_id) => HealthRecordRepo::list_by_pig(&state.pool, pig_id).await?,
        None => HealthRecordRepo::list(&state.pool).await?,
    };
    Ok(Json(records))
}

/// GET /api/v1/health-records/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HealthRecord>> {
    let record = HealthRecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Health record",
            id,
        }))?;
    Ok(Json(record))
}
