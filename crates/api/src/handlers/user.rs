//! Admin user-management handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::roles::{ROLE_ADMIN, ROLE_CARETAKER, ROLE_CLIENT, ROLE_PROCUREMENT, ROLE_SALES};
use farrowgate_core::types::DbId;
use farrowgate_db::models::user::{CreateUser, UserResponse};
use farrowgate_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// POST /api/v1/admin/users
///
/// Create a staff or client account. The admin role is not assignable
/// through the API; admin accounts are provisioned out of band.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let role = input.role.trim().to_lowercase();
    let assignable = [ROLE_SALES, ROLE_PROCUREMENT, ROLE_CARETAKER, ROLE_CLIENT];
    if !assignable.contains(&role.as_str()) {
        let msg = if role == ROLE_ADMIN {
            "The admin role cannot be assigned through the API".to_string()
        } else {
            format!("Unknown role: {role}")
        };
        return Err(AppError::Core(CoreError::Validation(msg)));
    }

    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username must not be empty".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // Duplicate username/email surfaces as 409 via the uq_ constraints.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            username: input.username,
            email: input.email,
            password_hash,
            role,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/admin/users
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user.into()))
}
