//! Handlers for the OTP issuance and verification endpoints.
//!
//! Raw codes exist in memory only long enough to email them; the
//! database and logs see the keyed HMAC digest exclusively.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use farrowgate_core::error::CoreError;
use farrowgate_core::otp::{self, TOKEN_TTL_MINS};
use farrowgate_db::repositories::{EmailVerificationRepo, OtpRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/otp/start`.
#[derive(Debug, Deserialize)]
pub struct StartOtpRequest {
    pub email: String,
    pub purpose: String,
}

/// Response for a successful issuance. Never contains the code.
#[derive(Debug, Serialize)]
pub struct StartOtpResponse {
    pub message: &'static str,
    /// Minutes until the issued code expires.
    pub expires_in_mins: i64,
    /// Seconds until another code may be requested.
    pub resend_after_secs: i64,
}

/// Request body for `POST /auth/otp/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub purpose: String,
    pub code: String,
}

/// Response for a successful verification.
#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    /// Single-use credential for completing the flow (e.g. registration).
    pub verification_token: String,
    /// Minutes until the token expires.
    pub expires_in_mins: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/otp/start
///
/// Issue a fresh code for (email, purpose), superseding any active one.
/// Enforces the resend cooldown against the active record.
pub async fn start(
    State(state): State<AppState>,
    Json(input): Json<StartOtpRequest>,
) -> AppResult<Json<StartOtpResponse>> {
    let otp_config = &state.config.otp;
    let email = input.email.trim().to_lowercase();
    let purpose = input.purpose.trim().to_lowercase();

    // 1. Input validation.
    if !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "Email address is not valid".into(),
        )));
    }
    if purpose.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Purpose must not be empty".into(),
        )));
    }

    // 2. Resend cooldown, measured against the active record.
    let now = Utc::now();
    if let Some(active) = OtpRepo::find_active(&state.pool, &email, &purpose).await? {
        if let Some(resend_after) = active.resend_after {
            if resend_after > now {
                let remaining = (resend_after - now).num_seconds().max(1);
                return Err(AppError::Core(CoreError::RateLimited {
                    message: "A code was sent recently. Wait before requesting another.".into(),
                    retry_after_secs: Some(remaining),
                }));
            }
        }
    }

    // 3. Generate, hash, and persist (supersede + insert in one tx).
    let code = otp::generate_code(otp_config.code_length);
    let hashed = otp::hash_code(&otp_config.secret, &code);
    let expires_at = now + Duration::minutes(otp_config.expiry_mins);
    let resend_after = now + Duration::seconds(otp_config.resend_cooldown_secs);

    OtpRepo::start(&state.pool, &email, &purpose, &hashed, expires_at, resend_after).await?;

    // 4. Deliver. A transport failure is reported as 503; the issued
    //    code stays valid, and the cooldown paces the retry.
    match &state.mailer {
        Some(mailer) => {
            mailer
                .send_verification_code(&email, &code, otp_config.expiry_mins)
                .await
                .map_err(|e| AppError::DeliveryUnavailable(e.to_string()))?;
        }
        None => {
            tracing::warn!(purpose = %purpose, "SMTP not configured; skipping code delivery");
        }
    }

    Ok(Json(StartOtpResponse {
        message: "Verification code sent",
        expires_in_mins: otp_config.expiry_mins,
        resend_after_secs: otp_config.resend_cooldown_secs,
    }))
}

/// POST /api/v1/auth/otp/verify
///
/// Verify a submitted code against the active record. On success mints
/// a single-use verification token. The code record is not consumed;
/// it stays verifiable until it expires or is superseded.
pub async fn verify(
    State(state): State<AppState>,
    Json(input): Json<VerifyOtpRequest>,
) -> AppResult<(StatusCode, Json<VerifyOtpResponse>)> {
    let otp_config = &state.config.otp;
    let email = input.email.trim().to_lowercase();
    let purpose = input.purpose.trim().to_lowercase();

    // 1. Shape check before any storage access.
    if !otp::is_well_formed(&input.code, otp_config.code_length) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Code must be exactly {} digits",
            otp_config.code_length
        ))));
    }

    // 2. Load the active record.
    let Some(active) = OtpRepo::find_active(&state.pool, &email, &purpose).await? else {
        return Err(AppError::Core(CoreError::InvalidCode(
            "No active code for this email. Request a new one.".into(),
        )));
    };

    // 3. Expiry.
    let now = Utc::now();
    if active.expires_at < now {
        return Err(AppError::Core(CoreError::Expired(
            "Code has expired. Request a new one.".into(),
        )));
    }

    // 4. Attempt ceiling, checked BEFORE the hash compare so a correct
    //    code cannot slip past an exhausted budget.
    if active.attempts >= otp_config.max_attempts {
        return Err(AppError::Core(CoreError::RateLimited {
            message: "Too many failed attempts. Request a new code.".into(),
            retry_after_secs: None,
        }));
    }

    // 5. Constant-time compare; count the miss.
    if !otp::verify_code(&otp_config.secret, &input.code, &active.hashed_code) {
        OtpRepo::increment_attempts(&state.pool, active.id).await?;
        return Err(AppError::Core(CoreError::InvalidCode(
            "Incorrect code".into(),
        )));
    }

    // 6. Mint the single-use verification token.
    let token = otp::generate_token();
    EmailVerificationRepo::create(
        &state.pool,
        &email,
        &purpose,
        &token,
        now,
        now + Duration::minutes(TOKEN_TTL_MINS),
    )
    .await?;

    tracing::info!(purpose = %purpose, "OTP verified; verification token issued");
    Ok((
        StatusCode::CREATED,
        Json(VerifyOtpResponse {
            verification_token: token,
            expires_in_mins: TOKEN_TTL_MINS,
        }),
    ))
}
