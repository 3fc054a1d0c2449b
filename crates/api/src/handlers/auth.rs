//! Handlers for the `/auth` resource (login, client self-registration).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::roles::ROLE_CLIENT;
use farrowgate_core::types::DbId;
use farrowgate_db::models::audit_event::CreateAuditEvent;
use farrowgate_db::models::email_verification::RedeemOutcome;
use farrowgate_db::models::user::{CreateUser, UserResponse};
use farrowgate_db::repositories::{AuditRepo, EmailVerificationRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::password::MIN_PASSWORD_LENGTH;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// OTP purpose tag for the client-registration flow.
pub const PURPOSE_REGISTRATION: &str = "registration";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Request body for `POST /auth/register`. The verification token must
/// come from a successful OTP verification for the same email.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub verification_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns a JWT access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find user by username.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    // 2. Check if the account is active.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    // 4. Generate the access token.
    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        },
    }))
}

/// POST /api/v1/auth/register
///
/// Client self-registration. Requires a verification token minted by a
/// successful OTP verification for the same email; the token is
/// consumed exactly once. The created account always has the `client`
/// role.
pub async fn register_client(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    // 1. Cheap input checks before touching storage. The email is
    //    normalized the same way the OTP flow stores it, so the token
    //    lookup and the uniqueness check see one canonical form.
    let email = input.email.trim().to_lowercase();
    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username must not be empty".into(),
        )));
    }
    if !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "Email address is not valid".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // 2. Uniqueness pre-checks, so a taken username does not burn the
    //    verification token. The uq_ constraints still backstop races.
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username is already taken".into(),
        )));
    }
    if UserRepo::find_by_email(&state.pool, &email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    // 3. Consume the verification token (exactly once).
    match EmailVerificationRepo::redeem(
        &state.pool,
        &email,
        PURPOSE_REGISTRATION,
        &input.verification_token,
    )
    .await?
    {
        RedeemOutcome::Redeemed(_) => {}
        RedeemOutcome::NotFound => {
            return Err(AppError::Core(CoreError::InvalidToken(
                "Verification token is unknown or already used".into(),
            )));
        }
        RedeemOutcome::Expired => {
            return Err(AppError::Core(CoreError::Expired(
                "Verification token has expired. Verify your email again.".into(),
            )));
        }
    }

    // 4. Hash the password and create the account.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        name: input.name,
        username: input.username,
        email,
        password_hash,
        role: ROLE_CLIENT.to_string(),
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    // 5. Audit trail.
    AuditRepo::record(
        &state.pool,
        &CreateAuditEvent {
            entity_type: "user",
            entity_id: user.id,
            action: "registered",
            recorded_by: Some(user.id),
            details: None,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Client account registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}
